//! pardu: parallel disk usage with a fixed pool of worker threads

pub mod engine;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;
use std::path::{Path, PathBuf};

/// Result alias used by public pardu API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Total bytes of every regular file under `root`, summed by `opts.num_workers` threads.
///
/// Fails before spawning anything if `root` does not exist or `num_workers` is zero. Once the
/// walk has started nothing is fatal: unreadable files and directories are skipped and counted
/// in [`DiskUsage::skipped_entries`].
///
/// A single root is walked by one worker; the others idle until stopped. Use [`du_roots`] to
/// spread several top-level roots across the pool.
///
/// ```no_run
/// let usage = pardu::du_dir(std::path::Path::new("."), &pardu::DuOpts::new(4))?;
/// println!("{}", pardu::engine::format_total(usage.total_bytes));
/// # Ok::<(), pardu::Error>(())
/// ```
pub fn du_dir(root: &Path, opts: &DuOpts) -> Result<DiskUsage> {
    du_roots(&[root.to_path_buf()], opts)
}

/// Like [`du_dir`] but seeds the queue with several roots, one work item each.
/// Every root is validated before any worker starts. Overlapping roots are counted twice.
pub fn du_roots(roots: &[PathBuf], opts: &DuOpts) -> Result<DiskUsage> {
    let config_str = format!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    debug!("{}", config_str);

    pipeline::collect_disk_usage(roots, opts)
}
