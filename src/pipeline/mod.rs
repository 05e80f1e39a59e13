//! Worker pool: work queue, workers, result collector and the coordinator that drives them.

pub mod collector;
pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod queue;
pub mod worker;

pub use collector::ResultCollector;
pub use context::{PipelineChannels, PipelineHandles, create_pipeline_channels};
pub use error_handler::report_skipped_entries;
pub use orchestrator::{collect_disk_usage, run_pipeline, shutdown_pipeline};
pub use queue::{DrainBarrier, WorkQueue};
pub use worker::{send_stop_sentinels, spawn_workers, subtree_size};
