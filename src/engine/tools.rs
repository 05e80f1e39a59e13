//! Filesystem helpers: root validation and per-file size reads.

use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};

/// Size of `path` if it is a regular file, following symlinks.
///
/// `Ok(None)` for anything else (directories, symlinks to directories, sockets, ...).
/// `Err` when the metadata cannot be read (vanished file, permission denied, broken link).
pub fn regular_file_size(path: &Path) -> io::Result<Option<u64>> {
    let meta = std::fs::metadata(path)?;
    Ok(meta.is_file().then(|| meta.len()))
}

/// Fail fast if `root` does not exist. The existence check itself never errors: an unreadable
/// parent counts as "does not exist".
pub fn check_root_exists(root: &Path) -> Result<()> {
    if !root.exists() {
        anyhow::bail!("Directory does not exist: {}", root.display());
    }
    Ok(())
}

/// Validate every root before any work starts. Returns owned copies ready to enqueue.
pub fn check_roots_exist(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    roots
        .iter()
        .map(|root| check_root_exists(root).map(|()| root.clone()))
        .collect()
}
