/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;

/// A mutable undirected [`RandomAccessGraph`] implementation based on a
/// vector of vectors.
///
/// Each edge `{u, v}` is stored as the two arcs `u → v` and `v → u`, and the
/// successors of each node are kept sorted, so that
/// [`successors`](RandomAccessGraph::successors) returns them in increasing
/// order in time proportional to the degree. Loops are not allowed, and
/// adding an edge twice has no effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of arcs in the graph (twice the number of edges).
    number_of_arcs: u64,
    /// For each node, its sorted list of successors.
    succ: Vec<Vec<usize>>,
}

impl core::default::Default for VecGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl VecGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            number_of_arcs: 0,
            succ: vec![],
        }
    }

    /// Creates a new graph with `n` isolated nodes.
    pub fn empty(n: usize) -> Self {
        Self {
            number_of_arcs: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Add an isolated node to the graph and return true if is a new node.
    ///
    /// All nodes with a smaller index that are not yet in the graph are added
    /// too.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        self.succ.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Add the edge `{u, v}` to the graph and return true if it is a new
    /// edge.
    ///
    /// # Panics
    /// - If the given nodes are bigger or equal than the number of nodes in the
    ///   graph.
    /// - If `u` and `v` are the same node.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        let max = u.max(v);
        if max >= self.succ.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.succ.len(),
            );
        }
        if u == v {
            panic!("Error adding edge ({u}, {v}): loops are not allowed");
        }
        if !Self::insert_sorted(&mut self.succ[u], v) {
            // no duplicated edges
            return false;
        }
        Self::insert_sorted(&mut self.succ[v], u);
        self.number_of_arcs += 2;
        true
    }

    /// Inserts `x` in a sorted vector, returning false if it was already
    /// present.
    fn insert_sorted(succ: &mut Vec<usize>, x: usize) -> bool {
        // Fast path: the generator appends nodes in increasing order
        match succ.last() {
            None => {
                succ.push(x);
                true
            }
            Some(&last) if last < x => {
                succ.push(x);
                true
            }
            _ => match succ.binary_search(&x) {
                Ok(_) => false,
                Err(pos) => {
                    succ.insert(pos, x);
                    true
                }
            },
        }
    }

    /// Add edges from an [`IntoIterator`].
    ///
    /// The items must be pairs of the form `(usize, usize)` specifying
    /// an edge.
    ///
    /// Note that new nodes will be added as needed.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (usize, usize)>) {
        for (u, v) in edges {
            self.add_node(u.max(v));
            self.add_edge(u, v);
        }
    }

    /// Creates a new graph from an [`IntoIterator`] of edges.
    ///
    /// The items must be pairs of the form `(usize, usize)` specifying
    /// an edge. The number of nodes is one plus the largest endpoint.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_edges(edges);
        g
    }

    /// Returns the number of edges in the graph.
    #[inline(always)]
    pub fn num_edges(&self) -> u64 {
        self.number_of_arcs / 2
    }

    /// Returns an iterator over the edges `{u, v}` of the graph as pairs
    /// with `u < v`, in lexicographical order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.succ.iter().enumerate().flat_map(|(u, succ)| {
            succ.iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    /// Returns the maximum degree of a node, or zero for the empty graph.
    pub fn max_degree(&self) -> usize {
        self.succ.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl RandomAccessGraph for VecGraph {
    type Successors<'succ> = core::iter::Copied<core::slice::Iter<'succ, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.number_of_arcs
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }

    fn has_arc(&self, src: usize, dst: usize) -> bool {
        self.succ[src].binary_search(&dst).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::check_undirected;

    #[test]
    fn test_add_edge() {
        let mut g = VecGraph::empty(4);
        assert!(g.add_edge(2, 0));
        assert!(g.add_edge(0, 1));
        assert!(g.add_edge(3, 0));
        assert!(!g.add_edge(1, 0));
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.num_arcs(), 6);
        assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(g.successors(3).collect::<Vec<_>>(), vec![0]);
        assert_eq!(g.outdegree(0), 3);
        assert_eq!(g.max_degree(), 3);
        assert!(g.has_arc(1, 0));
        assert!(!g.has_arc(1, 2));
        assert_eq!(check_undirected(&g), None);
    }

    #[test]
    fn test_from_edges() {
        let g = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (4, 3)]);
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(
            g.edges().collect::<Vec<_>>(),
            vec![(0, 1), (0, 2), (1, 2), (3, 4)]
        );
    }

    #[test]
    #[should_panic]
    fn test_loop() {
        let mut g = VecGraph::empty(2);
        g.add_edge(1, 1);
    }

    #[test]
    #[should_panic]
    fn test_missing_node() {
        let mut g = VecGraph::empty(2);
        g.add_edge(0, 2);
    }
}
