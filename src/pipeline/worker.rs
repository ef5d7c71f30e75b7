use crossbeam_channel::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::Row;
use crate::email::extract_domain;
use crate::utils::config::PipelineDefaults;

/// Domain of the email in `row`, or None when the row is too short or the address is invalid.
/// The email field is trimmed before validation.
pub fn domain_from_row(row: &[String]) -> Option<String> {
    let addr = row.get(PipelineDefaults::EMAIL_FIELD_INDEX)?;
    extract_domain(addr.trim())
}

/// Single worker: read rows from row_rx, send valid domains on domain_tx.
/// Returns when row_rx is closed and drained. Malformed rows are dropped without a trace.
fn domain_worker_loop(row_rx: Receiver<Row>, domain_tx: Sender<String>) -> usize {
    let mut sent = 0_usize;
    while let Ok(row) = row_rx.recv() {
        let Some(domain) = domain_from_row(&row) else {
            continue;
        };
        if domain_tx.send(domain).is_err() {
            break;
        }
        sent += 1;
    }
    drop(domain_tx);
    sent
}

/// Spawn domain workers. Caller must drop its own `domain_tx` after this so the domain
/// channel closes once the last worker exits.
pub fn spawn_domain_workers(
    row_rx: Receiver<Row>,
    domain_tx: &Sender<String>,
    num_workers: usize,
) -> Vec<JoinHandle<usize>> {
    (0..num_workers)
        .map(|_| {
            let row_rx = row_rx.clone();
            let domain_tx = domain_tx.clone();
            thread::spawn(move || domain_worker_loop(row_rx, domain_tx))
        })
        .collect()
}
