//! File descriptor limit detection for sanity-checking the worker count (Unix).

use super::config::WALK_MAX_OPEN;

/// Estimated number of file descriptors held per worker (one per open directory level of its walk).
pub const FDS_PER_WORKER: usize = WALK_MAX_OPEN;

/// Fraction of the process FD limit to use (leave headroom for stdio and the runtime).
const FD_LIMIT_FRACTION: f64 = 0.8;

/// Returns the soft limit for max open file descriptors, or `None` if unavailable (e.g. Windows).
#[cfg(unix)]
pub fn max_open_fds() -> Option<u64> {
    use std::mem::MaybeUninit;
    let mut rlim = MaybeUninit::<libc::rlimit>::uninit();
    if unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, rlim.as_mut_ptr()) } != 0 {
        return None;
    }
    let rlim = unsafe { rlim.assume_init() };
    let cur = rlim.rlim_cur;
    // RLIM_INFINITY is typically !0 or u64::MAX; treat as "no practical limit"
    if cur == libc::RLIM_INFINITY || cur > i64::MAX as u64 {
        return None;
    }
    Some(cur)
}

#[cfg(not(unix))]
pub fn max_open_fds() -> Option<u64> {
    None
}

/// Worker count that keeps every walk under ~80% of the FD limit.
/// Returns `None` if no limit is available.
pub fn max_workers_by_fd_limit() -> Option<usize> {
    let limit = max_open_fds()?;
    Some(workers_for_fd_limit(limit))
}

/// Pure part of [`max_workers_by_fd_limit`]: budget for a given soft limit. Never below 1.
pub fn workers_for_fd_limit(limit: u64) -> usize {
    let usable = (limit as f64 * FD_LIMIT_FRACTION) as usize;
    if usable < FDS_PER_WORKER {
        return 1;
    }
    usable / FDS_PER_WORKER
}

/// Workers that can hold directory handles at once. Each root is one work item, so workers
/// beyond the root count stay idle in `get()` with no descriptors open.
pub fn concurrent_walkers(num_workers: usize, num_roots: usize) -> usize {
    num_workers.min(num_roots)
}

/// True when `walkers` concurrent walks could exhaust a descriptor budget of `budget` workers.
pub fn exceeds_fd_budget(walkers: usize, budget: Option<usize>) -> bool {
    budget.is_some_and(|budget| walkers > budget)
}

/// Log a warning when `walkers` concurrent walks could exhaust file descriptors. The worker
/// count is never clamped; a walk that runs out of descriptors skips the directories it cannot open.
pub fn warn_if_over_fd_budget(walkers: usize) {
    let budget = max_workers_by_fd_limit();
    if exceeds_fd_budget(walkers, budget) {
        log::warn!(
            "{} concurrent walks may exceed the open file limit (suggested max {}); unreadable directories will be skipped",
            walkers,
            budget.unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workers_for_fd_limit_typical() {
        // 1024 * 0.8 = 819 usable, / 10 per worker
        assert_eq!(workers_for_fd_limit(1024), 81);
    }

    #[test]
    fn test_workers_for_fd_limit_tiny_limit_floors_at_one() {
        assert_eq!(workers_for_fd_limit(0), 1);
        assert_eq!(workers_for_fd_limit(5), 1);
    }

    #[test]
    fn test_concurrent_walkers_capped_by_roots() {
        // One root keeps one worker busy no matter how many are started.
        assert_eq!(concurrent_walkers(200, 1), 1);
        assert_eq!(concurrent_walkers(2, 5), 2);
        assert_eq!(concurrent_walkers(4, 0), 0);
    }

    #[test]
    fn test_many_idle_workers_do_not_exceed_budget() {
        let budget = Some(workers_for_fd_limit(1024));
        assert!(!exceeds_fd_budget(concurrent_walkers(200, 1), budget));
        assert!(exceeds_fd_budget(concurrent_walkers(200, 200), budget));
        assert!(!exceeds_fd_budget(10_000, None));
    }
}
