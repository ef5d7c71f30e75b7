//! Report building (sorted records) and rendering for the CLI.

use anyhow::{Context, Result};
use std::io::Write;

use crate::{DomainCount, DomainCounts, OutputFormat};

/// Sorted report from the final counts: ascending by domain, byte-wise.
pub fn build_report(counts: DomainCounts) -> Vec<DomainCount> {
    let mut report: Vec<DomainCount> = counts
        .into_iter()
        .map(|(domain, customer_quantity)| DomainCount {
            domain,
            customer_quantity,
        })
        .collect();
    // Keys are unique, so an unstable sort is still deterministic.
    report.sort_unstable_by(|a, b| a.domain.as_bytes().cmp(b.domain.as_bytes()));
    report
}

/// Write `report` to `out` in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &[DomainCount],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for r in report {
                writeln!(out, "{}\t{}", r.domain, r.customer_quantity)
                    .context("write report line")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report).context("serialize report")?;
            writeln!(out).context("write report")?;
        }
    }
    out.flush().context("flush report")
}
