use std::path::Path;
use std::thread::{self, JoinHandle};
use walkdir::WalkDir;

use crate::engine::tools::regular_file_size;
use crate::utils::config::{WALK_MAX_OPEN, worker_thread_name};
use crate::{PartialResult, WorkItem};

use super::collector::ResultCollector;
use super::queue::WorkQueue;

/// Sum the sizes of every regular file under `root`, best effort.
///
/// The whole subtree is walked here; subdirectories are never handed back to the queue.
/// Directories that cannot be listed and files whose size cannot be read are counted in
/// `skipped` and otherwise ignored.
pub fn subtree_size(root: &Path, follow_links: bool) -> PartialResult {
    let mut partial = PartialResult::default();
    let walk = WalkDir::new(root)
        .follow_links(follow_links)
        .max_open(WALK_MAX_OPEN);
    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => {
                partial.skipped += 1;
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        match regular_file_size(entry.path()) {
            Ok(Some(size)) => partial.bytes += size,
            Ok(None) => {}
            Err(_) => partial.skipped += 1,
        }
    }
    partial
}

/// Acknowledges the current item when dropped, so a panicking walk cannot wedge the drain barrier.
struct DoneGuard<'a>(&'a WorkQueue);

impl Drop for DoneGuard<'_> {
    fn drop(&mut self) {
        self.0.mark_done();
    }
}

/// Single worker: take items until the stop sentinel arrives. Returns the number of subtrees summed.
fn worker_loop(queue: WorkQueue, results: ResultCollector, follow_links: bool) -> usize {
    let mut processed = 0_usize;
    loop {
        let item = queue.get();
        let _done = DoneGuard(&queue);
        match item {
            WorkItem::Stop => return processed,
            WorkItem::Work(path) => {
                // Push before the guard acknowledges, so a drained queue implies collected results.
                results.push(subtree_size(&path, follow_links));
                processed += 1;
            }
        }
    }
}

/// Spawn `num_workers` named worker threads sharing `queue` and `results`.
/// Each exits after taking exactly one [`WorkItem::Stop`]. If a spawn fails, the workers already
/// started are stopped and joined before the error is returned.
pub fn spawn_workers(
    queue: &WorkQueue,
    results: &ResultCollector,
    num_workers: usize,
    follow_links: bool,
) -> std::io::Result<Vec<JoinHandle<usize>>> {
    let mut handles = Vec::with_capacity(num_workers);
    for i in 0..num_workers {
        let worker_queue = queue.clone();
        let worker_results = results.clone();
        let spawned = thread::Builder::new()
            .name(worker_thread_name(i))
            .spawn(move || worker_loop(worker_queue, worker_results, follow_links));
        match spawned {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                send_stop_sentinels(queue, handles.len());
                for h in handles {
                    let _ = h.join();
                }
                return Err(e);
            }
        }
    }
    Ok(handles)
}

/// Enqueue one [`WorkItem::Stop`] per worker.
pub fn send_stop_sentinels(queue: &WorkQueue, num_workers: usize) {
    for _ in 0..num_workers {
        queue.put(WorkItem::Stop);
    }
}
