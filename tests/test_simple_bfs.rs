/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use ba_bfs::prelude::*;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

fn logger_init() {
    // Several tests may try to install the logger
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Checks that `order` is a permutation of the nodes and that it is a valid
/// breadth-first order: each node but the first of its component is
/// discovered from a node appearing before it, and distances from the root
/// of the component never decrease.
fn check_bfs_order<G: RandomAccessGraph>(graph: &G, order: &[usize]) {
    let num_nodes = graph.num_nodes();
    assert_eq!(order.len(), num_nodes);

    let mut pos = vec![usize::MAX; num_nodes];
    for (i, &node) in order.iter().enumerate() {
        assert!(node < num_nodes);
        assert_eq!(pos[node], usize::MAX, "{} was seen twice", node);
        pos[node] = i;
    }

    let mut dist = vec![0; num_nodes];
    for (i, &node) in order.iter().enumerate() {
        // The discovering node is the earliest neighbor in the order
        let parent = graph
            .successors(node)
            .into_iter()
            .min_by_key(|&succ| pos[succ])
            .filter(|&succ| pos[succ] < i);
        match parent {
            None => dist[node] = 0,
            Some(parent) => {
                dist[node] = dist[parent] + 1;
                assert!(dist[node] >= dist[order[i - 1]]);
            }
        }
    }
}

#[test]
fn test_empty_graph() -> Result<()> {
    logger_init();
    let graph = generate_graph(0)?;
    assert_eq!(graph.num_nodes(), 0);
    assert_eq!(graph.num_edges(), 0);
    let result = traverse(&graph, true);
    assert_eq!(result.order, Some(vec![]));
    assert_eq!(result.num_visited, 0);
    Ok(())
}

#[test]
fn test_single_node() -> Result<()> {
    logger_init();
    let graph = generate_graph(1)?;
    assert_eq!(graph.num_nodes(), 1);
    assert_eq!(graph.num_edges(), 0);
    assert_eq!(traverse(&graph, true).order, Some(vec![0]));
    Ok(())
}

#[test]
fn test_ten_nodes() -> Result<()> {
    logger_init();
    for seed in 0..20 {
        let graph = generate_graph_with_seed(10, seed)?;
        let result = traverse(&graph, true);
        let order = result.order.clone().unwrap_or_default();
        assert_eq!(order[0], 0);
        check_bfs_order(&graph, &order);
        // Barabási–Albert graphs are connected
        assert_eq!(result.num_components, 1);
    }
    Ok(())
}

#[test]
fn test_two_triangles() {
    logger_init();
    let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
    let result = traverse(&graph, true);
    assert_eq!(result.order, Some(vec![0, 1, 2, 3, 4, 5]));
    assert_eq!(result.num_components, 2);
    assert_eq!(result.max_distance, 1);
}

#[test]
fn test_disconnected() {
    logger_init();
    // 5 - 0 - 3   1 - 4   2 (isolated)   6 - 7
    let mut graph = VecGraph::from_edges([(0, 5), (0, 3), (4, 1), (6, 7)]);
    graph.add_node(2);
    let result = traverse(&graph, true);
    assert_eq!(result.order, Some(vec![0, 3, 5, 1, 4, 2, 6, 7]));
    assert_eq!(result.num_components, 4);
    check_bfs_order(&graph, result.order.as_deref().unwrap_or_default());
}

#[test]
fn test_collect_order_does_not_change_the_visit() -> Result<()> {
    logger_init();
    let graph = generate_graph_with_seed(1000, 7)?;
    let with_order = traverse(&graph, true);
    let without_order = traverse(&graph, false);
    assert_eq!(without_order.order, None);
    assert_eq!(with_order.num_visited, 1000);
    assert_eq!(without_order.num_visited, 1000);
    assert_eq!(with_order.num_components, without_order.num_components);
    assert_eq!(with_order.max_distance, without_order.max_distance);
    Ok(())
}

#[test]
fn test_random_graphs() -> Result<()> {
    logger_init();
    for (n, seed) in [(2, 0), (3, 1), (4, 2), (100, 3), (5000, 4)] {
        let graph = generate_graph_with_seed(n, seed)?;
        assert_eq!(graph.num_nodes(), n as usize);
        assert_eq!(check_undirected(&graph), None);
        let result = traverse(&graph, true);
        check_bfs_order(&graph, result.order.as_deref().unwrap_or_default());
    }
    Ok(())
}

#[test]
fn test_distances() -> Result<()> {
    logger_init();
    // The distances reported by the visit are the lengths of shortest paths
    let graph = generate_graph_with_seed(500, 11)?;
    let mut visit = breadth_first::Seq::new(&graph);
    let mut distances = vec![usize::MAX; graph.num_nodes()];
    visit
        .visit(0, |event| {
            match event {
                breadth_first::Event::Root { node } => distances[node] = 0,
                breadth_first::Event::Discovered { node, distance, .. } => {
                    distances[node] = distance
                }
            }
            Continue(())
        })
        .continue_value_no_break();

    for (u, v) in graph.edges() {
        assert!(distances[u].abs_diff(distances[v]) <= 1);
    }
    for node in 1..graph.num_nodes() {
        assert!(graph
            .successors(node)
            .any(|succ| distances[succ] + 1 == distances[node]));
    }
    Ok(())
}

#[cfg(feature = "slow_tests")]
#[test]
fn test_large() -> Result<()> {
    logger_init();
    let graph = generate_graph_with_seed(1_000_000, 0)?;
    let result = traverse(&graph, true);
    check_bfs_order(&graph, result.order.as_deref().unwrap_or_default());
    Ok(())
}
