//! CLI entry point for the toroidal Game of Life pattern runner

use clap::Parser;
use lifegrid::io::cli::{Cli, FileProcessor};

fn main() -> lifegrid::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
