//! Public and internal types for the pardu API and worker pool.

use std::path::PathBuf;

/// One unit on the directory work queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkItem {
    /// Directory (or file) whose whole subtree one worker sums.
    Work(PathBuf),
    /// Termination signal. Exactly one is sent per worker.
    Stop,
}

/// What a worker produced for one [`WorkItem::Work`] subtree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartialResult {
    /// Bytes of every regular file whose size could be read.
    pub bytes: u64,
    /// Entries that could not be read (file sizes and directory listings). Never part of `bytes`.
    pub skipped: u64,
}

/// Result of a disk usage run. Formatting is left to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiskUsage {
    /// Grand total in bytes.
    pub total_bytes: u64,
    /// Worker threads started and joined.
    pub workers_joined: usize,
    /// Work items processed across all workers (sentinels not counted).
    pub items_processed: usize,
    /// Entries skipped because they could not be read.
    pub skipped_entries: u64,
}

/// Options for [`du_dir`](crate::du_dir) and [`du_roots`](crate::du_roots).
#[derive(Clone, Debug)]
pub struct DuOpts {
    /// Number of worker threads. Must be at least 1; no upper bound is enforced.
    pub num_workers: usize,
    /// Follow symbolic links while walking. Off by default, matching the walker's default.
    pub follow_links: bool,
}

impl DuOpts {
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers,
            follow_links: false,
        }
    }
}
