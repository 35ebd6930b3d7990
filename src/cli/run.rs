/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{handle, parse_request, GraphArgs, Request};
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "run",
    about = "Generates a Barabási–Albert graph, visits it in breadth-first order, and prints a JSON response.",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub graph: GraphArgs,

    #[arg(short, long)]
    /// Include the visit order in the response.
    pub debug: bool,

    #[arg(long, value_parser = parse_request)]
    /// A JSON request such as {"size": "small", "debug": true}; it overrides
    /// --size and --debug.
    pub request: Option<Request>,

    #[arg(long)]
    /// Pretty-print the response.
    pub pretty: bool,
}

pub fn main(args: CliArgs) -> Result<()> {
    let request = args.request.clone().unwrap_or(Request {
        size: args.graph.size,
        debug: args.debug,
    });
    let seed = args.graph.seed.unwrap_or_else(rand::random);

    log::info!(
        "Visiting a graph with {} nodes (seed {})",
        request.size.node_count(),
        seed
    );
    let response = handle(&request, &args.graph.generator, seed)?;
    log::info!(
        "Visited {} nodes in {} components, maximum distance {}",
        response.result.num_visited,
        response.result.num_components,
        response.result.max_distance
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{json}");

    Ok(())
}
