use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::engine::tools::check_roots_exist;
use crate::pipeline::{self, send_stop_sentinels};
use crate::utils::config::WorkerConsts;
use crate::utils::fd_limit::{concurrent_walkers, warn_if_over_fd_budget};
use crate::{DiskUsage, DuOpts, WorkItem};

/// Validate inputs, start the workers and enqueue every root. Nothing is spawned if a root is
/// missing or the worker count is zero. Caller finishes the run with [`shutdown_pipeline`].
pub fn run_pipeline(roots: &[PathBuf], opts: &DuOpts) -> Result<pipeline::PipelineHandles> {
    if opts.num_workers < WorkerConsts::MIN_WORKERS {
        anyhow::bail!(
            "number of worker threads must be at least {}",
            WorkerConsts::MIN_WORKERS
        );
    }
    let roots = check_roots_exist(roots)?;
    warn_if_over_fd_budget(concurrent_walkers(opts.num_workers, roots.len()));

    let channels = pipeline::create_pipeline_channels();
    let worker_handles = pipeline::spawn_workers(
        &channels.queue,
        &channels.results,
        opts.num_workers,
        opts.follow_links,
    )
    .context("spawn worker threads")?;
    debug!("Started {} workers", worker_handles.len());

    for root in roots {
        debug!("Queued {}", root.display());
        channels.queue.put(WorkItem::Work(root));
    }

    Ok(pipeline::PipelineHandles {
        queue: channels.queue,
        results: channels.results,
        worker_handles,
    })
}

/// Wait for the queue to drain, stop and join every worker, then fold the partial results.
/// A panicked worker is reported as an error only after all others have been joined.
pub fn shutdown_pipeline(handles: pipeline::PipelineHandles) -> Result<DiskUsage> {
    let pipeline::PipelineHandles {
        queue,
        results,
        worker_handles,
    } = handles;

    queue.wait_until_drained();
    debug!("Work queue drained; stopping {} workers", worker_handles.len());
    send_stop_sentinels(&queue, worker_handles.len());

    let mut workers_joined = 0_usize;
    let mut items_processed = 0_usize;
    let mut panicked = 0_usize;
    for h in worker_handles {
        match h.join() {
            Ok(n) => {
                workers_joined += 1;
                items_processed += n;
            }
            Err(_) => panicked += 1,
        }
    }
    if panicked > 0 {
        anyhow::bail!("{} worker thread(s) panicked", panicked);
    }

    let (sum, partials) = results.drain();
    debug!(
        "Joined {} workers; {} partial results totalling {} bytes",
        workers_joined, partials, sum.bytes
    );
    pipeline::report_skipped_entries(sum.skipped);

    Ok(DiskUsage {
        total_bytes: sum.bytes,
        workers_joined,
        items_processed,
        skipped_entries: sum.skipped,
    })
}

/// Main orchestrator: sum the disk usage of every root with a pool of `opts.num_workers` threads.
/// Queue → workers (one whole subtree each) → result collector → total.
pub fn collect_disk_usage(roots: &[PathBuf], opts: &DuOpts) -> Result<DiskUsage> {
    let handles = run_pipeline(roots, opts)?;
    shutdown_pipeline(handles)
}
