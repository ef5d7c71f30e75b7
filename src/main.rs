//! domaincount CLI: count customers per email domain in a CSV file.

use anyhow::Result;
use clap::Parser;
use domaincount::engine::arg_parser::Cli;
use domaincount::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
