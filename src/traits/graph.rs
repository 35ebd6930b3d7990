/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Basic traits to access graphs.
//!
//! Graphs are undirected, and every edge `{u, v}` is represented by the two
//! arcs `u → v` and `v → u`; hence, [`num_arcs`](RandomAccessGraph::num_arcs)
//! is twice the number of edges. Nodes are identified by a dense index in
//! `[0..num_nodes)`.

/// A graph providing random access to the successors of its nodes.
///
/// Successors must be returned in increasing order: breadth-first visits rely
/// on this property to be reproducible.
pub trait RandomAccessGraph {
    /// The type of the iterator over the successors of a node.
    type Successors<'succ>: IntoIterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the successors of a node, in increasing order.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `node` is not smaller than
    /// [`num_nodes`](RandomAccessGraph::num_nodes).
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    ///
    /// The default implementation iterates over the successors.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).into_iter().count()
    }

    /// Returns whether the arc `src → dst` is present.
    fn has_arc(&self, src: usize, dst: usize) -> bool {
        for succ in self.successors(src) {
            if succ == dst {
                return true;
            }
            // early stop
            if succ > dst {
                return false;
            }
        }
        false
    }
}

/// Checks that a graph is symmetric and loopless, that is, that it
/// represents a simple undirected graph.
///
/// Returns the first offending arc, if any.
pub fn check_undirected<G: RandomAccessGraph>(graph: &G) -> Option<(usize, usize)> {
    for node in 0..graph.num_nodes() {
        for succ in graph.successors(node) {
            if succ == node || !graph.has_arc(succ, node) {
                return Some((node, succ));
            }
        }
    }
    None
}
