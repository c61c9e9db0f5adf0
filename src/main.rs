//! CLI entry point for the crossword filler

use clap::Parser;
use crossfill::io::cli::{Cli, run};

fn main() -> crossfill::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    run(cli)
}
