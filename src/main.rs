//! CLI entry point for the neighbour-aware tile mapping tool

use clap::Parser;
use gidmap::io::cli::{Cli, FileProcessor, print_summary};

fn main() -> gidmap::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut processor = FileProcessor::new(cli);
    let summary = processor.process()?;
    print_summary(&summary);
    Ok(())
}
