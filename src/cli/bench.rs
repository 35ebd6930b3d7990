/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{get_thread_pool, handle, GraphArgs, Measurement, Request};
use anyhow::{ensure, Result};
use clap::Parser;
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "bench",
    about = "Benchmarks independent graph generations and breadth-first visits, possibly in parallel.",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub graph: GraphArgs,

    #[arg(short = 'R', long, default_value_t = 10)]
    /// Number of invocations.
    pub repeats: usize,

    #[arg(short = 'j', long, default_value_t = 1)]
    /// The number of invocations running concurrently.
    pub num_threads: usize,

    #[arg(short, long)]
    /// Collect the visit order, as a request with the debug flag would.
    pub debug: bool,
}

pub fn main(args: CliArgs) -> Result<()> {
    ensure!(args.repeats > 0, "The number of repeats must be positive");
    ensure!(args.num_threads > 0, "The number of threads must be positive");

    let base_seed = args.graph.seed.unwrap_or_else(rand::random);
    log::info!(
        "Running {} invocations with {} nodes on {} threads (base seed {})",
        args.repeats,
        args.graph.size.node_count(),
        args.num_threads,
        base_seed
    );

    let request = Request {
        size: args.graph.size,
        debug: args.debug,
    };
    // Each invocation owns its graph and visit state
    let thread_pool = get_thread_pool(args.num_threads)?;
    let measurements = thread_pool.install(|| {
        (0..args.repeats)
            .into_par_iter()
            .map(|i| {
                let seed = base_seed.wrapping_add(i as u64);
                handle(&request, &args.graph.generator, seed)
                    .map(|response| response.measurement)
            })
            .collect::<Result<Vec<Measurement>>>()
    })?;

    let (min, avg, max) = summarize(measurements.iter().map(|m| m.graph_generating_time));
    log::info!("Graph generation (µs): min {min}, avg {avg:.1}, max {max}");
    let (min, avg, max) = summarize(measurements.iter().map(|m| m.compute_time));
    log::info!("Breadth-first visit (µs): min {min}, avg {avg:.1}, max {max}");

    Ok(())
}

/// Returns minimum, average, and maximum of a nonempty sequence of timings.
fn summarize(timings: impl Iterator<Item = u64>) -> (u64, f64, u64) {
    let mut min = u64::MAX;
    let mut max = 0;
    let mut sum = 0_u128;
    let mut count = 0_usize;
    for t in timings {
        min = min.min(t);
        max = max.max(t);
        sum += t as u128;
        count += 1;
    }
    (min, sum as f64 / count.max(1) as f64, max)
}
