use anyhow::Result;
use log::debug;

use crate::pipeline::{self, OnReceived};
use crate::{DomainCounts, Row};

/// Start the dispatch + worker + aggregate pipeline over `rows`. Returns handles; pass them to
/// [`shutdown_pipeline`] to wait for completion and take the counts.
pub fn run_pipeline<I>(
    rows: I,
    tuning: &pipeline::PipelineTuning,
    on_received: Option<OnReceived>,
) -> pipeline::PipelineHandles
where
    I: Iterator<Item = Result<Row>> + Send + 'static,
{
    debug!(
        "Starting pipeline: {} workers, queue capacity {}",
        tuning.num_workers, tuning.queue_capacity
    );
    let channels = pipeline::create_pipeline_channels(tuning.queue_capacity);

    let aggregate_handle = pipeline::spawn_aggregate_thread(channels.domain_rx, on_received);

    let worker_handles = pipeline::spawn_domain_workers(
        channels.row_rx,
        &channels.domain_tx,
        tuning.num_workers,
    );

    // Dropping our sender leaves the workers as the only producers, so the domain channel
    // closes exactly when the last worker exits.
    drop(channels.domain_tx);

    let dispatch_handle = pipeline::spawn_dispatch_thread(channels.row_tx, rows);

    pipeline::PipelineHandles {
        dispatch_handle,
        worker_handles,
        aggregate_handle,
    }
}

/// Shut down the pipeline in order and return the counts.
///
/// Dispatcher first (row channel closed), then every worker (domain channel closed once the
/// last one exits), then the aggregator. The counts are only read after the aggregator has
/// exited. Errors are reported after all threads are joined, so an input error never leaves
/// a worker blocked.
pub fn shutdown_pipeline(handles: pipeline::PipelineHandles) -> Result<DomainCounts> {
    let pipeline::PipelineHandles {
        dispatch_handle,
        worker_handles,
        aggregate_handle,
    } = handles;

    let dispatch = pipeline::join_stage(dispatch_handle, "dispatch");

    let mut stage_errors = Vec::new();
    let mut forwarded = 0_usize;
    for h in worker_handles {
        match pipeline::join_stage(h, "worker") {
            Ok(n) => forwarded += n,
            Err(e) => stage_errors.push(e),
        }
    }

    let counts = match pipeline::join_stage(aggregate_handle, "aggregate") {
        Ok(counts) => Some(counts),
        Err(e) => {
            stage_errors.push(e);
            None
        }
    };

    let rows = pipeline::first_pipeline_error(dispatch, stage_errors)?;
    let counts = counts.unwrap_or_default();
    debug!(
        "Pipeline done: {} rows dispatched, {} domains counted, {} distinct",
        rows,
        forwarded,
        counts.len()
    );
    Ok(counts)
}

/// Main orchestrator: count domains over `rows` and wait for the pipeline to finish.
/// Row source → row channel → workers (validate) → domain channel → aggregator → map.
pub fn collect_counts<I>(
    rows: I,
    tuning: &pipeline::PipelineTuning,
    on_received: Option<OnReceived>,
) -> Result<DomainCounts>
where
    I: Iterator<Item = Result<Row>> + Send + 'static,
{
    let handles = run_pipeline(rows, tuning, on_received);
    shutdown_pipeline(handles)
}
