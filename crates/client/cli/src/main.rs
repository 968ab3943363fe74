//! Terminal client entry point.
mod app;
mod input;
mod presentation;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Result;
use app::CliApp;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Play a blast puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "blast-cli")]
#[command(about = "Line-driven blast puzzle", long_about = None)]
#[command(version)]
pub struct Args {
    /// Content bundle or game config (.toml, .ron or .json).
    /// Uses the bundled default game when omitted.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for tile generation
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Maximum number of undoable moves (unbounded when omitted)
    #[arg(long, value_name = "N")]
    history: Option<NonZeroUsize>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging();

    CliApp::builder(args).build()?.run()
}

/// Logs to stderr so stdout carries only the board.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
