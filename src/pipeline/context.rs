//! Pipeline context: the two shared queues and the handles of the running workers.

use std::thread::JoinHandle;

use super::collector::ResultCollector;
use super::queue::WorkQueue;

/// The only shared state of a run. The coordinator keeps these; workers get clones.
pub struct PipelineChannels {
    pub queue: WorkQueue,
    pub results: ResultCollector,
}

pub fn create_pipeline_channels() -> PipelineChannels {
    PipelineChannels {
        queue: WorkQueue::new(),
        results: ResultCollector::new(),
    }
}

/// Handles returned by [`run_pipeline`](super::run_pipeline) once workers are running and every
/// root is enqueued. Pass to [`shutdown_pipeline`](super::shutdown_pipeline) to finish the run.
pub struct PipelineHandles {
    pub queue: WorkQueue,
    pub results: ResultCollector,
    pub worker_handles: Vec<JoinHandle<usize>>,
}
