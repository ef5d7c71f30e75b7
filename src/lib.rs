//! domaincount: count customers per email domain over a bounded fan-out/fan-in pipeline.

pub mod email;
pub mod engine;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

pub use email::{extract_domain, is_valid_email};
pub use report::build_report;
pub use source::CsvRows;

use std::io::Read;
use std::path::Path;

/// Result alias used by public domaincount API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Count domains over data rows from any source and return the sorted report.
///
/// `rows` yields data rows only (no header). The first `Err` stops the input; the pipeline still
/// drains and joins every thread before that error is returned.
///
/// ```ignore
/// let rows = vec![Ok(vec!["a".into(), "b".into(), "x@y.com".into()])];
/// let report = domaincount::tally_rows(rows.into_iter(), &Default::default())?;
/// assert_eq!(report[0].domain, "y.com");
/// ```
pub fn tally_rows<I>(rows: I, opts: &TallyOpts) -> Result<Vec<DomainCount>>
where
    I: Iterator<Item = Result<Row>> + Send + 'static,
{
    let tuning = pipeline::PipelineTuning::from_opts(opts)?;
    tally_with_tuning(rows, &tuning)
}

fn tally_with_tuning<I>(rows: I, tuning: &pipeline::PipelineTuning) -> Result<Vec<DomainCount>>
where
    I: Iterator<Item = Result<Row>> + Send + 'static,
{
    let counts = pipeline::collect_counts(rows, tuning, None)?;
    Ok(build_report(counts))
}

/// Count domains in CSV read from `rdr`. The first record is the header and is skipped.
pub fn tally_reader<R>(rdr: R, opts: &TallyOpts) -> Result<Vec<DomainCount>>
where
    R: Read + Send + 'static,
{
    let tuning = pipeline::PipelineTuning::from_opts(opts)?;
    tally_with_tuning(CsvRows::from_reader(rdr)?, &tuning)
}

/// Count domains in the CSV file at `path`. Open or header failures return before any thread starts.
pub fn tally_file(path: &Path, opts: &TallyOpts) -> Result<Vec<DomainCount>> {
    let tuning = pipeline::PipelineTuning::from_opts(opts)?;
    tally_with_tuning(CsvRows::open(path)?, &tuning)
}
