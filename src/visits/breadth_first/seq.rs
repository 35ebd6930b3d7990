/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use crate::visits::breadth_first::Event;
use nonmax::NonMaxUsize;
use std::{collections::VecDeque, ops::ControlFlow, ops::ControlFlow::Continue};
use sux::prelude::*;

/// A sequential breadth-first visit of the component of a root.
///
/// Nodes are marked as visited when they are enqueued, and successors are
/// scanned in increasing order, so the sequence of events is the discovery
/// order. Visited nodes stay visited across calls to [`visit`](Seq::visit)
/// until [`reset`](Seq::reset) is called.
///
/// The queue stores `Option<NonMaxUsize>`: `None` marks the end of a level,
/// which gives distances without storing them per node.
///
/// # Examples
///
/// ```
/// use ba_bfs::prelude::*;
/// use no_break::NoBreak;
/// use std::ops::ControlFlow::Continue;
///
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut d = [usize::MAX; 4];
/// visit
///     .visit(0, |event| {
///         match event {
///             breadth_first::Event::Root { node } => d[node] = 0,
///             breadth_first::Event::Discovered { node, distance, .. } => d[node] = distance,
///         }
///         Continue(())
///     })
///     .continue_value_no_break();
///
/// assert_eq!(d, [0, 1, 1, 2]);
/// ```
pub struct Seq<'a, G: RandomAccessGraph> {
    graph: &'a G,
    visited: BitVec,
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<'a, G: RandomAccessGraph> Seq<'a, G> {
    /// Creates a new sequential visit of the given graph.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: BitVec::new(graph.num_nodes()),
            queue: VecDeque::new(),
        }
    }

    /// Returns the graph being visited.
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Returns whether a node has been visited.
    pub fn is_visited(&self, node: usize) -> bool {
        self.visited[node]
    }

    /// Visits the unvisited nodes reachable from `root`.
    ///
    /// Nothing happens if `root` has already been visited. Otherwise, the
    /// callback receives an [`Event::Root`] followed by an
    /// [`Event::Discovered`] for each other node of the component.
    ///
    /// # Panics
    ///
    /// If `root` is not a node of the graph.
    pub fn visit<E>(
        &mut self,
        root: usize,
        mut callback: impl FnMut(Event) -> ControlFlow<E, ()>,
    ) -> ControlFlow<E, ()> {
        if self.visited[root] {
            return Continue(());
        }
        self.visited.set(root, true);
        callback(Event::Root { node: root })?;

        self.queue.clear();
        self.queue.push_back(Some(to_non_max(root)));
        self.queue.push_back(None);
        // Distance of the nodes discovered from the current level
        let mut distance = 1;

        while let Some(entry) = self.queue.pop_front() {
            match entry {
                Some(pred) => {
                    let pred = pred.get();
                    for node in self.graph.successors(pred) {
                        if self.visited[node] {
                            continue;
                        }
                        self.visited.set(node, true);
                        callback(Event::Discovered {
                            node,
                            pred,
                            distance,
                        })?;
                        self.queue.push_back(Some(to_non_max(node)));
                    }
                }
                // The next level has been fully enqueued
                None if !self.queue.is_empty() => {
                    distance += 1;
                    self.queue.push_back(None);
                }
                None => {}
            }
        }

        Continue(())
    }

    /// Makes all nodes unvisited.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.visited = BitVec::new(self.graph.num_nodes());
    }
}

#[inline(always)]
fn to_non_max(node: usize) -> NonMaxUsize {
    NonMaxUsize::new(node).expect("node index should never be usize::MAX")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::vec_graph::VecGraph;
    use no_break::NoBreak;

    fn events<G: RandomAccessGraph>(visit: &mut Seq<'_, G>, root: usize) -> Vec<Event> {
        let mut events = vec![];
        visit
            .visit(root, |event| {
                events.push(event);
                Continue(())
            })
            .continue_value_no_break();
        events
    }

    #[test]
    fn test_events() {
        // 3 - 1 - 0 - 2 - 4, plus the isolated node 5
        let mut graph = VecGraph::from_edges([(0, 1), (0, 2), (1, 3), (2, 4)]);
        graph.add_node(5);
        let mut visit = Seq::new(&graph);

        assert_eq!(
            events(&mut visit, 0),
            vec![
                Event::Root { node: 0 },
                Event::Discovered {
                    node: 1,
                    pred: 0,
                    distance: 1
                },
                Event::Discovered {
                    node: 2,
                    pred: 0,
                    distance: 1
                },
                Event::Discovered {
                    node: 3,
                    pred: 1,
                    distance: 2
                },
                Event::Discovered {
                    node: 4,
                    pred: 2,
                    distance: 2
                },
            ]
        );
        assert!(visit.is_visited(4));
        assert!(!visit.is_visited(5));
    }

    #[test]
    fn test_visited_roots_are_skipped() {
        let graph = VecGraph::from_edges([(0, 1), (2, 3)]);
        let mut visit = Seq::new(&graph);
        assert_eq!(events(&mut visit, 1).len(), 2);
        assert!(events(&mut visit, 0).is_empty());
        assert_eq!(events(&mut visit, 3), vec![
            Event::Root { node: 3 },
            Event::Discovered {
                node: 2,
                pred: 3,
                distance: 1
            },
        ]);

        visit.reset();
        assert!(!visit.is_visited(0));
        assert_eq!(events(&mut visit, 0).len(), 2);
    }

    #[test]
    fn test_break() {
        let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
        let mut visit = Seq::new(&graph);
        let result = visit.visit(0, |event| {
            if let Event::Discovered { node: 2, distance, .. } = event {
                return ControlFlow::Break(distance);
            }
            Continue(())
        });
        assert_eq!(result, ControlFlow::Break(2));
        assert!(!visit.is_visited(3));
    }
}
