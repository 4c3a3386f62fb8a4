//! eseries CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, scan the
//! legacy grammar, run the search, and render the result tables.
//! For programmatic use, prefer the library API (`eseries::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
