//! Aggregator: the only writer of the domain counts.

use crossbeam_channel::Receiver;
use std::thread::{self, JoinHandle};

use crate::DomainCounts;
use crate::utils::config::ProgressConsts;

/// Progress callback invoked with the number of domains received since the last call.
pub type OnReceived = Box<dyn Fn(usize) + Send>;

pub fn spawn_aggregate_thread(
    domain_rx: Receiver<String>,
    on_received: Option<OnReceived>,
) -> JoinHandle<DomainCounts> {
    thread::spawn(move || run_aggregate_loop(domain_rx, on_received))
}

/// Count every domain from `domain_rx` until the channel is closed and drained.
/// Progress is reported every [`ProgressConsts::PROGRESS_UPDATE_BATCH_SIZE`] domains, remainder at the end.
pub fn run_aggregate_loop(
    domain_rx: Receiver<String>,
    on_received: Option<OnReceived>,
) -> DomainCounts {
    let batch = ProgressConsts::PROGRESS_UPDATE_BATCH_SIZE;
    let mut counts = DomainCounts::new();
    let mut pending = 0_usize;
    while let Ok(domain) = domain_rx.recv() {
        *counts.entry(domain).or_insert(0) += 1;
        pending += 1;
        if pending == batch {
            if let Some(f) = &on_received {
                f(pending);
            }
            pending = 0;
        }
    }
    if pending > 0
        && let Some(f) = &on_received
    {
        f(pending);
    }
    counts
}
