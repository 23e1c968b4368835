//! Development tasks for the spell engine
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Audit, Inspect};

/// Development tasks for the spell engine
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for spell data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show the derived rule facts of one spell
    Inspect(Inspect),

    /// Build the whole catalog and report what the derivations produced
    Audit(Audit),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Inspect(cmd) => cmd.execute(),
        Command::Audit(cmd) => cmd.execute(),
    }
}
