/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! [`Seq`] visits the connected component of a root. [`SimpleBfs`] builds on
//! it to cover a possibly disconnected graph, restarting from the
//! lowest-index unvisited node each time a component is exhausted, and
//! [`traverse`] is the one-call entry point to [`SimpleBfs`].

mod seq;
pub use seq::*;

mod simple;
pub use simple::*;

/// Events passed to the callback of a breadth-first visit, in discovery
/// order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// The visit starts from an unvisited root, now marked as visited.
    Root {
        /// The root.
        node: usize,
    },
    /// A node has been reached for the first time: it is now marked as
    /// visited and enqueued.
    Discovered {
        /// The discovered node.
        node: usize,
        /// The node whose successors were being scanned.
        pred: usize,
        /// The distance of [node](`Event::Discovered::node`) from the root.
        distance: usize,
    },
}
