/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::graphs::vec_graph::VecGraph;

/// The default number of nodes of the seed graph.
pub const DEFAULT_SEED_SIZE: usize = 3;
/// The default number of edges added with each new node.
pub const DEFAULT_EDGES_PER_NODE: usize = 2;

/// Errors raised before a random graph is generated.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

/// Provides an implementation of Barabási–Albert random graphs.
///
/// The Barabási–Albert model grows an undirected graph by preferential
/// attachment: it starts from a complete seed graph on `m0` nodes, and then
/// adds the remaining nodes one at a time, connecting each new node to `m`
/// distinct existing nodes chosen with probability proportional to their
/// current degree. The resulting graph is simple: there are no loops and no
/// multiple edges.
///
/// If the number of nodes `n` is at most `m0`, the result is the complete
/// graph on `n` nodes; in particular, for `n` equal to zero or one there are
/// no edges.
///
/// When fewer than `m` existing nodes have positive degree, which might
/// happen only at the first step when `m0` is one, the new node is connected
/// to all existing nodes.
///
/// # Examples
///
/// ```
/// use ba_bfs::prelude::*;
///
/// let graph = BarabasiAlbert::new(100, 0)
///     .seed_size(4)
///     .edges_per_node(3)
///     .generate()?;
/// assert_eq!(graph.num_nodes(), 100);
/// // 6 seed edges, then 3 edges for each of the remaining 96 nodes
/// assert_eq!(graph.num_edges(), 6 + 3 * 96);
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BarabasiAlbert {
    n: usize,
    m0: usize,
    m: usize,
    seed: u64,
}

impl BarabasiAlbert {
    /// Creates a new Barabási–Albert random graph generator, given the number
    /// of nodes and a seed for the [pseudorandom number generator](SmallRng).
    ///
    /// The size of the seed graph and the number of edges per new node are
    /// set to [`DEFAULT_SEED_SIZE`] and [`DEFAULT_EDGES_PER_NODE`].
    pub fn new(n: usize, seed: u64) -> Self {
        Self {
            n,
            m0: DEFAULT_SEED_SIZE,
            m: DEFAULT_EDGES_PER_NODE,
            seed,
        }
    }

    /// Creates a new Barabási–Albert random graph generator from a signed
    /// node count, as received from an external request.
    ///
    /// Negative node counts are rejected with [`GraphError::InvalidArgument`].
    pub fn try_new(node_count: i64, seed: u64) -> Result<Self, GraphError> {
        let n = usize::try_from(node_count).map_err(|_| GraphError::InvalidArgument {
            name: "node count",
            reason: format!("{node_count} is negative"),
        })?;
        Ok(Self::new(n, seed))
    }

    /// Sets the number of nodes of the complete seed graph.
    pub fn seed_size(mut self, m0: usize) -> Self {
        self.m0 = m0;
        self
    }

    /// Sets the number of edges connecting each new node to the graph.
    pub fn edges_per_node(mut self, m: usize) -> Self {
        self.m = m;
        self
    }

    /// Checks the parameters and returns the number of edge endpoints of the
    /// graph, that is, twice the number of edges.
    fn check(&self) -> Result<usize, GraphError> {
        if self.m0 == 0 {
            return Err(GraphError::InvalidArgument {
                name: "seed size",
                reason: "the seed graph must contain at least one node".to_string(),
            });
        }
        if self.m == 0 {
            return Err(GraphError::InvalidArgument {
                name: "edges per node",
                reason: "each new node must add at least one edge".to_string(),
            });
        }
        if self.m > self.m0 {
            return Err(GraphError::InvalidArgument {
                name: "edges per node",
                reason: format!(
                    "{} edges per node cannot be sampled from a seed graph of {} nodes",
                    self.m, self.m0
                ),
            });
        }

        let seed_size = self.m0.min(self.n);
        let arcs_per_node = self.m.checked_mul(2).ok_or_else(|| GraphError::InvalidArgument {
            name: "edges per node",
            reason: format!("{} edges per node do not fit in memory", self.m),
        })?;
        arcs_per_node
            .checked_mul(self.n - seed_size)
            .and_then(|arcs| {
                seed_size
                    .checked_mul(seed_size.saturating_sub(1))
                    .and_then(|seed_arcs| arcs.checked_add(seed_arcs))
            })
            .ok_or_else(|| GraphError::InvalidArgument {
                name: "node count",
                reason: format!(
                    "{} nodes with {} edges per node do not fit in memory",
                    self.n, self.m
                ),
            })
    }

    /// Generates the graph.
    pub fn generate(&self) -> Result<VecGraph, GraphError> {
        let num_endpoints = self.check()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut graph = VecGraph::empty(self.n);
        let seed_size = self.m0.min(self.n);

        // Every node appears here once for each unit of degree, so sampling
        // uniformly from this list is sampling proportionally to degree.
        let mut endpoints = Vec::with_capacity(num_endpoints);
        for u in 0..seed_size {
            for v in u + 1..seed_size {
                graph.add_edge(u, v);
                endpoints.push(u);
                endpoints.push(v);
            }
        }
        // Number of nodes with positive degree
        let mut linked = if seed_size > 1 { seed_size } else { 0 };

        let mut pl = ProgressLogger::default();
        pl.item_name("node")
            .local_speed(true)
            .expected_updates(Some(self.n - seed_size));
        pl.start(format!(
            "Generating Barabási–Albert graph with {} nodes (m0 = {}, m = {})...",
            self.n, self.m0, self.m
        ));

        let mut targets = Vec::with_capacity(self.m.min(self.n));
        for v in seed_size..self.n {
            targets.clear();
            if linked < self.m {
                targets.extend(0..v);
                linked = v + 1;
            } else {
                while targets.len() < self.m {
                    let target = endpoints[rng.random_range(0..endpoints.len())];
                    if !targets.contains(&target) {
                        targets.push(target);
                    }
                }
                linked += 1;
            }

            for &target in &targets {
                graph.add_edge(v, target);
                endpoints.push(target);
                endpoints.push(v);
            }
            pl.light_update();
        }

        pl.done();
        log::debug!(
            "Generated {} nodes and {} edges, maximum degree {}",
            self.n,
            graph.num_edges(),
            graph.max_degree()
        );

        Ok(graph)
    }
}

/// Generates a Barabási–Albert graph with the given number of nodes and
/// default parameters, using a random seed.
///
/// Negative node counts are rejected with [`GraphError::InvalidArgument`].
pub fn generate_graph(node_count: i64) -> Result<VecGraph, GraphError> {
    let seed = rand::random::<u64>();
    log::debug!("Using seed {seed}");
    generate_graph_with_seed(node_count, seed)
}

/// Generates a Barabási–Albert graph with the given number of nodes and
/// default parameters, using the given seed.
///
/// Negative node counts are rejected with [`GraphError::InvalidArgument`].
pub fn generate_graph_with_seed(node_count: i64, seed: u64) -> Result<VecGraph, GraphError> {
    BarabasiAlbert::try_new(node_count, seed)?.generate()
}
