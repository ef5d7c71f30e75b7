use anyhow::Result;
use std::thread::JoinHandle;

/// Join a pipeline stage, mapping a panic to an error naming the stage.
pub fn join_stage<T>(handle: JoinHandle<T>, stage: &str) -> Result<T> {
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("{} thread panicked", stage))
}

/// Pick the error to report once every stage has been joined: the input error wins over panics.
pub fn first_pipeline_error(
    dispatch: Result<Result<usize>>,
    stage_errors: Vec<anyhow::Error>,
) -> Result<usize> {
    let rows = match dispatch {
        Ok(Err(read_err)) => return Err(read_err),
        Err(panic) => return Err(panic),
        Ok(Ok(rows)) => rows,
    };
    match stage_errors.into_iter().next() {
        Some(e) => Err(e),
        None => Ok(rows),
    }
}
