//! Dispatch loop: consumes an iterator of `Result<Row>` and sends rows to row_tx.

use anyhow::Result;
use crossbeam_channel::Sender;
use std::thread::{self, JoinHandle};

use crate::Row;

pub fn spawn_dispatch_thread<I>(row_tx: Sender<Row>, rows: I) -> JoinHandle<Result<usize>>
where
    I: Iterator<Item = Result<Row>> + Send + 'static,
{
    thread::spawn(move || run_dispatch_loop(row_tx, rows))
}

/// Send every row from `rows` to `row_tx` in source order, blocking while the channel is full.
/// Stops at end of input, at the first read error, or when no worker is left to receive.
/// `row_tx` is dropped on return in every case, which closes the row channel for the workers.
/// Returns the count of rows sent, or the read error.
pub fn run_dispatch_loop<I>(row_tx: Sender<Row>, rows: I) -> Result<usize>
where
    I: Iterator<Item = Result<Row>>,
{
    let mut count = 0_usize;
    for row in rows {
        match row {
            Ok(row) => {
                if row_tx.send(row).is_err() {
                    log::warn!("all workers gone; stopped dispatching after {} rows", count);
                    break;
                }
                count += 1;
            }
            Err(e) => {
                drop(row_tx);
                return Err(e.context(format!("input failed after {} rows", count)));
            }
        }
    }
    drop(row_tx);
    Ok(count)
}
