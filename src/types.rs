//! Public and internal types for the domaincount API and pipeline.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Fields of one input record, in column order. Moved between pipeline stages, never shared.
pub type Row = Vec<String>;

/// Map of domain → number of customers seen with that domain.
///
/// **Shape:** `HashMap<String, u64>` where each key is a lower-cased domain. Built by the
/// aggregator thread alone and handed back through its join handle once the results channel
/// is drained; turn it into a sorted report with [`build_report`](crate::report::build_report).
pub type DomainCounts = HashMap<String, u64>;

/// One line of the final report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    /// Lower-cased domain (the part after `@`).
    pub domain: String,
    /// Number of data rows whose email belongs to `domain`.
    pub customer_quantity: u64,
}

/// Lib-only options for [`tally_rows`](crate::tally_rows) and friends.
#[derive(Clone, Debug, Default)]
pub struct TallyOpts {
    /// Worker thread count. When None, uses [`PipelineDefaults::WORKERS`](crate::utils::PipelineDefaults::WORKERS).
    pub num_workers: Option<usize>,
    /// Capacity of the row and domain channels. When None, uses [`PipelineDefaults::QUEUE_CAPACITY`](crate::utils::PipelineDefaults::QUEUE_CAPACITY).
    pub queue_capacity: Option<usize>,
}

/// How the CLI renders the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `domain<TAB>count` line per domain.
    #[default]
    Text,
    /// Pretty-printed JSON array of records.
    Json,
}

impl From<&Opts> for TallyOpts {
    fn from(o: &Opts) -> Self {
        TallyOpts {
            num_workers: o.num_workers,
            queue_capacity: o.queue_capacity,
        }
    }
}

/// Full options (CLI). Use [`TallyOpts`] for lib.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    /// CSV file to read.
    pub input: PathBuf,
    /// Worker thread count override.
    pub num_workers: Option<usize>,
    /// Channel capacity override.
    pub queue_capacity: Option<usize>,
    /// Report rendering.
    pub format: OutputFormat,
    /// Debug logging and progress counter.
    pub verbose: bool,
}
