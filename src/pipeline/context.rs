//! Pipeline tuning, channels and handles shared by the dispatcher, workers and aggregator.

use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, bounded};
use std::thread::JoinHandle;

use crate::utils::config::PipelineDefaults;
use crate::{DomainCounts, Row, TallyOpts};

/// Worker count and channel capacity for one run.
#[derive(Clone, Debug)]
pub struct PipelineTuning {
    pub num_workers: usize,
    /// Capacity for the row channel and the domain channel (each).
    pub queue_capacity: usize,
}

impl Default for PipelineTuning {
    fn default() -> Self {
        Self {
            num_workers: PipelineDefaults::WORKERS,
            queue_capacity: PipelineDefaults::QUEUE_CAPACITY,
        }
    }
}

impl PipelineTuning {
    /// Resolve opts against defaults. Zero workers or zero capacity is a setup error.
    pub fn from_opts(opts: &TallyOpts) -> Result<Self> {
        let tuning = Self {
            num_workers: opts.num_workers.unwrap_or(PipelineDefaults::WORKERS),
            queue_capacity: opts
                .queue_capacity
                .unwrap_or(PipelineDefaults::QUEUE_CAPACITY),
        };
        if tuning.num_workers == 0 {
            anyhow::bail!("worker count must be at least 1");
        }
        if tuning.queue_capacity == 0 {
            anyhow::bail!("queue capacity must be at least 1");
        }
        Ok(tuning)
    }
}

/// Both bounded channels. Dispatcher gets row_tx; workers get row_rx and domain_tx; aggregator gets domain_rx.
pub struct PipelineChannels {
    pub row_tx: Sender<Row>,
    pub row_rx: Receiver<Row>,
    pub domain_tx: Sender<String>,
    pub domain_rx: Receiver<String>,
}

pub fn create_pipeline_channels(queue_capacity: usize) -> PipelineChannels {
    let (row_tx, row_rx) = bounded::<Row>(queue_capacity);
    let (domain_tx, domain_rx) = bounded::<String>(queue_capacity);
    PipelineChannels {
        row_tx,
        row_rx,
        domain_tx,
        domain_rx,
    }
}

/// Handles returned by [`run_pipeline`](super::run_pipeline). Pass to
/// [`shutdown_pipeline`](super::shutdown_pipeline) to join every stage in order and take the counts.
/// `dispatch_handle` yields the number of rows dispatched, or the read error that stopped it.
/// Each worker handle yields the number of domains that worker forwarded.
pub struct PipelineHandles {
    pub dispatch_handle: JoinHandle<Result<usize>>,
    pub worker_handles: Vec<JoinHandle<usize>>,
    pub aggregate_handle: JoinHandle<DomainCounts>,
}
