//! Interactive stats shell.
//!
//! Reads commands from standard input and prints answers to standard output.
//! Logs go to standard error.

use std::io;

use anyhow::{anyhow, Context as _};
use clap::{ArgAction, Parser, ValueEnum};
use rangecount::counting::{RangeCountIndex, SortedCountIndex, DEFAULT_MAX_SPAN};
use rangecount::shell::{self, Session};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Counting engine backing the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    /// Dense table over the observed range: O(1) queries.
    Table,
    /// Sorted snapshot: O(log n) queries, no span limit.
    Sorted,
}

#[derive(Parser)]
#[command(
    version,
    about = "Interactive shell answering less-than, greater-than and between counts"
)]
struct Cli {
    /// Enable verbose output. (Specify more than once for more verbosity.)
    #[arg(short = 'v', long, action = ArgAction::Count, default_value_t = 0)]
    verbose: u8,

    /// Counting engine to use.
    #[arg(long, value_enum, default_value_t = EngineKind::Table)]
    engine: EngineKind,

    /// Largest number of integers the table engine will tabulate on `calc`.
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_SPAN,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max_span: u64,
}

impl Cli {
    /// Gets the configured log level based on the user-supplied verbosity level.
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn initialize_logging(default_level: LevelFilter) -> anyhow::Result<()> {
    // RUST_LOG, when set, overrides the verbosity flag.
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level())?;

    tracing::info!(engine = ?cli.engine, max_span = cli.max_span, "Configured stats shell.");

    let input = io::stdin().lock();
    let output = io::stdout().lock();

    let result = match cli.engine {
        EngineKind::Table => shell::run(
            Session::new(RangeCountIndex::with_max_span(cli.max_span)),
            input,
            output,
        ),
        EngineKind::Sorted => shell::run(Session::new(SortedCountIndex::new()), input, output),
    };

    result.context("stats shell failed")
}
