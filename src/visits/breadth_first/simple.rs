/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use crate::visits::breadth_first::{Event, Seq};
use dsi_progress_logger::prelude::*;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// The result of a [simple breadth-first visit](SimpleBfs).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalResult {
    /// The number of nodes visited.
    pub num_visited: usize,
    /// The number of roots from which a visit started, that is, the number of
    /// connected components covered.
    pub num_components: usize,
    /// The maximum distance of a node from the root of its component.
    pub max_distance: usize,
    /// The visited nodes in discovery order, if requested.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub order: Option<Vec<usize>>,
}

/// A simple breadth-first visit covering all nodes of a graph.
///
/// A breadth-first visit starts from a root; when the queue empties, the
/// visit restarts from the unvisited node of lowest index, until all nodes
/// have been visited. Since successors are scanned in increasing order, the
/// visit is deterministic: components are visited in the order of their
/// lowest-index node (except for the component of an explicit root, which is
/// visited first), and within each component nodes appear in breadth-first
/// order.
///
/// The visit state is kept between calls to
/// [`traverse_from`](SimpleBfs::traverse_from), so a second call visits only
/// the nodes left unvisited by the first one; use [`reset`](SimpleBfs::reset)
/// to start over.
///
/// # Examples
///
/// ```
/// use ba_bfs::prelude::*;
///
/// // Two triangles
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
/// let mut bfs = SimpleBfs::new(&graph);
/// let result = bfs.traverse_from(Some(4), true);
/// assert_eq!(result.order, Some(vec![4, 3, 5, 0, 1, 2]));
/// assert_eq!(result.num_components, 2);
///
/// // Nothing is left
/// assert_eq!(bfs.traverse_from(None, false).num_visited, 0);
/// ```
pub struct SimpleBfs<'a, G: RandomAccessGraph> {
    visit: Seq<'a, G>,
}

impl<'a, G: RandomAccessGraph> SimpleBfs<'a, G> {
    /// Creates a new simple breadth-first visit of the given graph.
    pub fn new(graph: &'a G) -> Self {
        Self {
            visit: Seq::new(graph),
        }
    }

    /// Visits all unvisited nodes, starting from the given root.
    ///
    /// If `root` is `None`, the visit starts from node 0 or, if node 0 has
    /// already been visited, from the unvisited node of lowest index. The
    /// discovery order is returned in [`TraversalResult::order`] only if
    /// `collect_order` is true; the visit is the same in both cases.
    ///
    /// # Panics
    ///
    /// If `root` is not a node of the graph.
    pub fn traverse_from(&mut self, root: Option<usize>, collect_order: bool) -> TraversalResult {
        let num_nodes = self.visit.graph().num_nodes();
        if let Some(root) = root {
            assert!(
                root < num_nodes,
                "Node {} does not exist (the graph has {} nodes)",
                root,
                num_nodes
            );
        }

        let mut result = TraversalResult {
            order: collect_order.then(|| Vec::with_capacity(num_nodes)),
            ..Default::default()
        };

        let mut pl = ProgressLogger::default();
        pl.item_name("node")
            .local_speed(true)
            .expected_updates(Some(num_nodes));
        pl.start("Visiting graph in breadth-first order...");

        // Already visited roots are skipped, so scanning from 0 again after
        // each component yields the lowest-index unvisited node
        for root in root.into_iter().chain(0..num_nodes) {
            self.visit
                .visit(root, |event| {
                    let (node, distance) = match event {
                        Event::Root { node } => {
                            result.num_components += 1;
                            (node, 0)
                        }
                        Event::Discovered { node, distance, .. } => (node, distance),
                    };
                    result.num_visited += 1;
                    result.max_distance = result.max_distance.max(distance);
                    if let Some(order) = &mut result.order {
                        order.push(node);
                    }
                    pl.light_update();
                    Continue(())
                })
                .continue_value_no_break();
        }

        pl.done();
        log::debug!(
            "Visited {} nodes in {} components",
            result.num_visited,
            result.num_components
        );

        result
    }

    /// Resets the visit status, making all nodes unvisited.
    pub fn reset(&mut self) {
        self.visit.reset();
    }
}

/// Visits all nodes of a graph in breadth-first order, starting from node 0
/// and restarting from the unvisited node of lowest index each time the
/// queue empties.
///
/// See [`SimpleBfs`] for details.
pub fn traverse<G: RandomAccessGraph>(graph: &G, collect_order: bool) -> TraversalResult {
    SimpleBfs::new(graph).traverse_from(None, collect_order)
}
