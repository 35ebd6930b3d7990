/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface structs, functions, and methods.
//!
//! The command-line interface handles benchmark requests: it maps symbolic
//! graph sizes to node counts, generates a Barabási–Albert graph, visits it,
//! and reports the result together with timing measurements as JSON.

use crate::graphs::random::{BarabasiAlbert, DEFAULT_EDGES_PER_NODE, DEFAULT_SEED_SIZE};
use crate::visits::breadth_first::{traverse, TraversalResult};
use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;
use std::time::{Instant, SystemTime};

pub mod bench;
pub mod run;

/// The size of the graph of a request.
///
/// Symbolic sizes are mapped to node counts by
/// [`node_count`](GraphSize::node_count); explicit node counts are kept as
/// they are (possibly negative, in which case the generator will reject them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "SizeRepr")]
pub enum GraphSize {
    /// 10 nodes.
    Test,
    /// 10 000 nodes.
    Small,
    /// 100 000 nodes.
    Large,
    /// An explicit number of nodes.
    Nodes(i64),
}

impl GraphSize {
    /// Returns the number of nodes corresponding to this size.
    pub fn node_count(self) -> i64 {
        match self {
            GraphSize::Test => 10,
            GraphSize::Small => 10_000,
            GraphSize::Large => 100_000,
            GraphSize::Nodes(n) => n,
        }
    }
}

impl FromStr for GraphSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "test" => Ok(GraphSize::Test),
            "small" => Ok(GraphSize::Small),
            "large" => Ok(GraphSize::Large),
            _ => Ok(GraphSize::Nodes(s.parse::<i64>().with_context(|| {
                format!("Invalid graph size {s:?}: expected test, small, large, or a number of nodes")
            })?)),
        }
    }
}

/// How a [`GraphSize`] appears in a JSON request: either a name or a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Name(String),
    Nodes(i64),
}

impl TryFrom<SizeRepr> for GraphSize {
    type Error = anyhow::Error;

    fn try_from(value: SizeRepr) -> Result<Self> {
        match value {
            SizeRepr::Name(name) => name.parse(),
            SizeRepr::Nodes(n) => Ok(GraphSize::Nodes(n)),
        }
    }
}

/// A benchmark request, usually received as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Request {
    /// The size of the graph.
    pub size: GraphSize,
    /// Whether to include the visit order in the response.
    #[serde(default)]
    pub debug: bool,
}

/// Parses a JSON [`Request`].
pub fn parse_request(arg: &str) -> Result<Request> {
    serde_json::from_str(arg).with_context(|| format!("Invalid request {arg:?}"))
}

/// Timing measurements, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub graph_generating_time: u64,
    pub compute_time: u64,
}

/// The response to a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub result: TraversalResult,
    pub measurement: Measurement,
}

#[derive(Args, Debug, Clone)]
/// Parameters of the Barabási–Albert generator.
pub struct GeneratorArgs {
    #[arg(long, default_value_t = DEFAULT_SEED_SIZE)]
    /// The number of nodes of the complete seed graph.
    pub m0: usize,

    #[arg(short = 'm', long, default_value_t = DEFAULT_EDGES_PER_NODE)]
    /// The number of edges connecting each new node to the graph.
    pub edges_per_node: usize,
}

impl Default for GeneratorArgs {
    fn default() -> Self {
        Self {
            m0: DEFAULT_SEED_SIZE,
            edges_per_node: DEFAULT_EDGES_PER_NODE,
        }
    }
}

#[derive(Args, Debug, Clone)]
/// Shared CLI arguments for commands generating a graph.
pub struct GraphArgs {
    #[arg(short, long, value_parser = GraphSize::from_str, default_value = "test")]
    /// The size of the graph: test (10 nodes), small (10 000 nodes), large
    /// (100 000 nodes), or an explicit number of nodes.
    pub size: GraphSize,

    #[clap(flatten)]
    pub generator: GeneratorArgs,

    #[arg(long)]
    /// The seed of the pseudorandom number generator (random if not given).
    pub seed: Option<u64>,
}

/// Serves a [`Request`]: generates a graph and visits it, measuring the time
/// spent in each phase.
///
/// The visit order is included in the result only if the request asks for it.
pub fn handle(request: &Request, generator: &GeneratorArgs, seed: u64) -> Result<Response> {
    let node_count = request.size.node_count();
    log::debug!("Handling request for {node_count} nodes with seed {seed}");

    let start = Instant::now();
    let graph = BarabasiAlbert::try_new(node_count, seed)?
        .seed_size(generator.m0)
        .edges_per_node(generator.edges_per_node)
        .generate()?;
    let graph_generating_time = start.elapsed();

    let start = Instant::now();
    let result = traverse(&graph, request.debug);
    let compute_time = start.elapsed();

    ensure!(
        Some(result.num_visited) == usize::try_from(node_count).ok(),
        "The visit reached {} nodes out of {}",
        result.num_visited,
        node_count
    );

    Ok(Response {
        result,
        measurement: Measurement {
            graph_generating_time: graph_generating_time.as_micros() as u64,
            compute_time: compute_time.as_micros() as u64,
        },
    })
}

/// Creates a threadpool with the given number of threads.
pub fn get_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Failed to create thread pool")
}

/// Initializes the `env_logger` logger with a custom format including
/// timestamps with elapsed time since initialization.
pub fn init_env_logger() -> Result<()> {
    use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};
    use jiff::SpanRound;

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);
    let span_round = SpanRound::new()
        .largest(jiff::Unit::Day)
        .smallest(jiff::Unit::Millisecond)
        .days_are_24_hours();

    builder.format(move |buf, record| {
        let Ok(ts) = jiff::Timestamp::try_from(SystemTime::now()) else {
            return Err(std::io::Error::other("Failed to get timestamp"));
        };
        let style = buf.default_level_style(record.level());
        let elapsed = start.elapsed();
        let span = jiff::Span::new()
            .seconds(elapsed.as_secs() as i64)
            .milliseconds(elapsed.subsec_millis() as i64);
        let span = span.round(span_round).map_err(std::io::Error::other)?;
        writeln!(
            buf,
            "{} {} {style}{}{style:#} [{:?}] {} - {}",
            ts.strftime("%F %T%.3f"),
            printer.span_to_string(&span),
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.init();
    Ok(())
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    Run(run::CliArgs),
    Bench(bench::CliArgs),
}

#[derive(Parser, Debug)]
#[command(name = "ba-bfs", version)]
/// Generates Barabási–Albert random graphs and visits them in breadth-first
/// order.
///
/// Noteworthy environment variables:
///
/// RUST_LOG: configuration for env_logger, pass `debug` to see the seeds and
/// graph statistics, or `trace` to see all the details.
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}

/// The entry point of the command-line interface.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    match cli.command {
        SubCommands::Run(args) => {
            run::main(args)?;
        }
        SubCommands::Bench(args) => {
            bench::main(args)?;
        }
    }

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Pretty-prints seconds in a human-readable format.
fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    match hours {
        0 => {}
        1 => result.push_str("1 hour "),
        _ => result.push_str(&format!("{} hours ", hours)),
    }
    match minutes {
        0 => {}
        1 => result.push_str("1 minute "),
        _ => result.push_str(&format!("{} minutes ", minutes)),
    }

    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}
