/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod random;

pub mod vec_graph;

pub mod prelude {
    pub use super::random::{
        generate_graph, generate_graph_with_seed, BarabasiAlbert, GraphError,
    };
    pub use super::vec_graph::VecGraph;
}
