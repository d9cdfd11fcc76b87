//! collapse-docs - Flatten a directory of documents into a single corpus file
//!
//! collapse-docs provides:
//! - Ordered title manifests driving output order
//! - One document per output line, newlines replaced by spaces
//! - A machine-readable run summary (jsonl/json/md)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_tracing(&cli);
    cli::run(cli)
}
