//! Progress counter for the verbose CLI.

use kdam::{Animation, Bar, BarExt};
use std::sync::{Arc, Mutex};

use crate::pipeline::OnReceived;

pub type ProgressBar = Arc<Mutex<Bar>>;

/// Create a counter for unknown total (shows count without percentage)
pub fn create_counter(desc: &'static str) -> ProgressBar {
    Arc::new(Mutex::new(kdam::tqdm!(
        total = 0,
        desc = desc,
        animation = Animation::Classic,
        position = 0,
        unit = " domains"
    )))
}

/// Update progress bar if available
/// Uses try_lock to avoid blocking if mutex is contended (non-blocking)
pub fn update_progress_bar(pb: &ProgressBar, n: usize) {
    if let Ok(mut pb) = pb.try_lock() {
        let _ = pb.update(n);
    }
}

/// Final refresh so the last count is shown, then end the bar's line.
pub fn finish_progress_bar(pb: &ProgressBar) {
    if let Ok(mut pb) = pb.lock() {
        let _ = pb.refresh();
        eprintln!();
    }
}

/// Create a callback for the aggregator that advances the bar.
pub fn progress_callback(bar: &Option<ProgressBar>) -> Option<OnReceived> {
    bar.as_ref().map(|bar| {
        let bar = Arc::clone(bar);
        Box::new(move |n: usize| update_progress_bar(&bar, n)) as OnReceived
    })
}
