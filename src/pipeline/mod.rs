//! Pipeline components: dispatcher, domain workers, aggregator, and the coordinator that joins them.

pub mod aggregate;
pub mod context;
pub mod dispatch;
pub mod error_handler;
pub mod orchestrator;
pub mod worker;

pub use aggregate::{OnReceived, run_aggregate_loop, spawn_aggregate_thread};
pub use context::{PipelineChannels, PipelineHandles, PipelineTuning, create_pipeline_channels};
pub use dispatch::{run_dispatch_loop, spawn_dispatch_thread};
pub use error_handler::{first_pipeline_error, join_stage};
pub use orchestrator::{collect_counts, run_pipeline, shutdown_pipeline};
pub use worker::{domain_from_row, spawn_domain_workers};
