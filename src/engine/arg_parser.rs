use clap::Parser;
use std::path::PathBuf;

use crate::OutputFormat;
use crate::utils::config::PackagePaths;

/// Count customers per email domain in a CSV export.
#[derive(Clone, Parser)]
#[command(name = "domaincount")]
#[command(about = "Count customers per email domain. The email is read from the third column; the first row is a header.")]
pub struct Cli {
    /// CSV file to read.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Number of worker threads validating rows. Default: 8.
    #[arg(long, short = 'w', value_parser = clap::value_parser!(usize))]
    pub workers: Option<usize>,

    /// Capacity of the row and domain queues. Default: 1000.
    #[arg(long, short = 'q', value_parser = clap::value_parser!(usize))]
    pub queue_capacity: Option<usize>,

    /// Report format.
    #[arg(long, short = 'F', value_enum)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging and progress counter).
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Settings file. Default: `.domaincount.toml` in the current directory, if present.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Settings file path, defaulting to the package config filename in the current directory.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(PackagePaths::get().config_filename()))
    }
}
