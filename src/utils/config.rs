//! Application configuration constants.
//! Unit scaling and walk tuning in one place.

// ---- Units ----

/// Binary unit divisors used when reporting a byte total.
pub struct UnitConsts;

impl UnitConsts {
    /// Bytes per mebibyte (1024^2). Reported as "MB".
    pub const BYTES_PER_MIB: u64 = 1024 * 1024;
    /// Bytes per gibibyte (1024^3). Reported as "GB".
    pub const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;
}

// ---- Worker threads ----

/// Worker pool limits. There is no upper bound; the count is taken as given.
pub struct WorkerConsts;

impl WorkerConsts {
    /// Fewer workers than this can never drain the queue.
    pub const MIN_WORKERS: usize = 1;
    /// Middle part of worker thread names (`<pkg>-worker-<i>`).
    pub const THREAD_ROLE: &'static str = "worker";
}

/// Thread name for worker `index`, e.g. `pardu-worker-3`.
pub fn worker_thread_name(index: usize) -> String {
    format!(
        "{}-{}-{}",
        env!("CARGO_PKG_NAME"),
        WorkerConsts::THREAD_ROLE,
        index
    )
}

// ---- Walk ----

/// Max directory handles a single worker's walk keeps open at once (walkdir's `max_open`).
/// Deeper trees are still walked; walkdir buffers the remaining entries in memory instead.
pub const WALK_MAX_OPEN: usize = 10;
