//! CLI command handler: read settings, run the tally, print the report.

use anyhow::Result;
use log::{debug, warn};
use std::io;

use crate::engine::arg_parser::Cli;
use crate::engine::progress::{create_counter, finish_progress_bar, progress_callback};
use crate::report::write_report;
use crate::source::CsvRows;
use crate::utils::{
    SettingsFile, apply_file_to_opts, load_default_settings, load_settings, setup_logging,
};
use crate::{Opts, TallyOpts, pipeline, report};

/// Defaults, then settings file, then CLI flags.
fn build_opts(cli: &Cli, file: Option<&SettingsFile>) -> Opts {
    let mut opts = Opts {
        input: cli.input.clone(),
        ..Default::default()
    };
    if let Some(file) = file {
        apply_file_to_opts(file, &mut opts);
    }
    if cli.workers.is_some() {
        opts.num_workers = cli.workers;
    }
    if cli.queue_capacity.is_some() {
        opts.queue_capacity = cli.queue_capacity;
    }
    if let Some(format) = cli.format {
        opts.format = format;
    }
    if let Some(verbose) = cli.verbose {
        opts.verbose = verbose;
    }
    opts
}

/// Read the input named on the command line and print domain counts to stdout.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let config_path = cli.config_path();
    let (file, file_err) = match &cli.config {
        Some(path) => (Some(load_settings(path)?), None),
        None => match load_default_settings(&config_path) {
            Ok(file) => (file, None),
            Err(e) => (None, Some(e)),
        },
    };
    let opts = build_opts(cli, file.as_ref());
    setup_logging(opts.verbose);
    if let Some(e) = file_err {
        warn!("ignoring {}: {:#}", config_path.display(), e);
    }
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );

    let tuning = pipeline::PipelineTuning::from_opts(&TallyOpts::from(&opts))?;
    let rows = CsvRows::open(&opts.input)?;

    let bar = opts.verbose.then(|| create_counter("Tallying"));
    let counts = pipeline::collect_counts(rows, &tuning, progress_callback(&bar))?;
    if let Some(bar) = &bar {
        finish_progress_bar(bar);
    }

    let report = report::build_report(counts);
    debug!("{} domains in report", report.len());
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &report, opts.format)
}
