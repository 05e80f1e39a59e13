use pardu::engine::format_total;
use pardu::pipeline::run_pipeline;
use pardu::{DuOpts, du_dir, du_roots};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * MIB;

fn write_file(path: &Path, len: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![7u8; len]).unwrap();
}

/// Nested tree totalling 1 + 20 + 300 + 4000 + 50_000 bytes.
fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(&root.join("one.txt"), 1);
    write_file(&root.join("dir1/twenty.txt"), 20);
    write_file(&root.join("dir1/sub/three_hundred.txt"), 300);
    write_file(&root.join("dir2/four_k.bin"), 4000);
    write_file(&root.join("dir2/a/b/c/d/fifty_k.bin"), 50_000);
    fs::create_dir_all(root.join("empty_dir")).unwrap();
    temp
}

const TREE_TOTAL: u64 = 1 + 20 + 300 + 4000 + 50_000;

// --- totals ---

#[test]
fn test_total_matches_sum_of_files() {
    let temp = create_test_tree();
    let usage = du_dir(temp.path(), &DuOpts::new(2)).unwrap();
    assert_eq!(usage.total_bytes, TREE_TOTAL);
    assert_eq!(usage.skipped_entries, 0);
}

#[test]
fn test_total_is_independent_of_worker_count() {
    let temp = create_test_tree();
    for n in [1, 2, 8] {
        let usage = du_dir(temp.path(), &DuOpts::new(n)).unwrap();
        assert_eq!(usage.total_bytes, TREE_TOTAL, "workers = {n}");
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let temp = create_test_tree();
    let opts = DuOpts::new(3);
    let first = du_dir(temp.path(), &opts).unwrap();
    let second = du_dir(temp.path(), &opts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_directory_is_zero() {
    let temp = TempDir::new().unwrap();
    let usage = du_dir(temp.path(), &DuOpts::new(4)).unwrap();
    assert_eq!(usage.total_bytes, 0);
    assert_eq!(
        format_total(usage.total_bytes),
        "Total disk usage: 0.00 MB (0.00 GB)"
    );
}

#[test]
fn test_one_and_two_mib_files_report_three_mb() {
    let temp = TempDir::new().unwrap();
    write_file(&temp.path().join("one"), MIB as usize);
    write_file(&temp.path().join("two"), 2 * MIB as usize);
    let usage = du_dir(temp.path(), &DuOpts::new(2)).unwrap();
    assert_eq!(usage.total_bytes, 3 * MIB);
    assert_eq!(
        format_total(usage.total_bytes),
        "Total disk usage: 3.00 MB (0.00 GB)"
    );
}

#[test]
fn test_one_gib_file_reports_one_gb() {
    let temp = TempDir::new().unwrap();
    // Sparse: logical length is what gets summed.
    File::create(temp.path().join("big"))
        .unwrap()
        .set_len(GIB)
        .unwrap();
    let usage = du_dir(temp.path(), &DuOpts::new(1)).unwrap();
    assert_eq!(usage.total_bytes, GIB);
    assert_eq!(
        format_total(usage.total_bytes),
        "Total disk usage: 1024.00 MB (1.00 GB)"
    );
}

#[test]
fn test_root_that_is_a_file_counts_itself() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("lonely");
    write_file(&file, 42);
    assert_eq!(du_dir(&file, &DuOpts::new(1)).unwrap().total_bytes, 42);
}

// --- failures before traversal ---

#[test]
fn test_missing_root_is_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");
    let err = du_dir(&missing, &DuOpts::new(4)).unwrap_err();
    assert!(err.to_string().contains("Directory does not exist"));
}

#[test]
fn test_missing_root_fails_before_any_worker_handle_exists() {
    let temp = TempDir::new().unwrap();
    let roots = vec![temp.path().join("does-not-exist")];
    assert!(run_pipeline(&roots, &DuOpts::new(64)).is_err());
}

#[test]
fn test_zero_workers_is_error() {
    let temp = create_test_tree();
    assert!(du_dir(temp.path(), &DuOpts::new(0)).is_err());
}

#[test]
fn test_du_roots_rejects_any_missing_root() {
    let temp = create_test_tree();
    let roots = vec![temp.path().join("dir1"), temp.path().join("nope")];
    assert!(du_roots(&roots, &DuOpts::new(2)).is_err());
}

// --- worker lifecycle ---

#[test]
fn test_exactly_n_workers_start_and_join() {
    let temp = create_test_tree();
    for n in [1, 3, 16] {
        let usage = du_dir(temp.path(), &DuOpts::new(n)).unwrap();
        assert_eq!(usage.workers_joined, n);
        assert_eq!(usage.items_processed, 1);
    }
}

#[test]
fn test_du_roots_spreads_roots_across_workers() {
    let temp = create_test_tree();
    let roots: Vec<PathBuf> = ["one.txt", "dir1", "dir2", "empty_dir"]
        .iter()
        .map(|p| temp.path().join(p))
        .collect();
    let usage = du_roots(&roots, &DuOpts::new(4)).unwrap();
    assert_eq!(usage.total_bytes, TREE_TOTAL);
    assert_eq!(usage.items_processed, 4);
    assert_eq!(usage.workers_joined, 4);
}

#[test]
fn test_du_roots_with_no_roots_is_zero() {
    let usage = du_roots(&[], &DuOpts::new(2)).unwrap();
    assert_eq!(usage.total_bytes, 0);
    assert_eq!(usage.items_processed, 0);
    assert_eq!(usage.workers_joined, 2);
}

// --- best effort ---

#[cfg(unix)]
#[test]
fn test_broken_symlink_is_skipped() {
    let temp = create_test_tree();
    std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("dir1/dangling"))
        .unwrap();
    let usage = du_dir(temp.path(), &DuOpts::new(2)).unwrap();
    assert_eq!(usage.total_bytes, TREE_TOTAL);
    assert_eq!(usage.skipped_entries, 1);
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let temp = create_test_tree();
    let locked = temp.path().join("locked");
    write_file(&locked.join("secret.bin"), 999);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still list it; then it simply counts.
    let expected = if fs::read_dir(&locked).is_ok() {
        TREE_TOTAL + 999
    } else {
        TREE_TOTAL
    };
    let privileged = expected != TREE_TOTAL;
    let usage = du_dir(temp.path(), &DuOpts::new(2));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let usage = usage.unwrap();
    assert_eq!(usage.total_bytes, expected);
    if !privileged {
        assert_eq!(usage.skipped_entries, 1);
    }
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_is_skipped_when_following_links() {
    let temp = create_test_tree();
    std::os::unix::fs::symlink(temp.path(), temp.path().join("dir1/back_to_root")).unwrap();
    let opts = DuOpts {
        follow_links: true,
        ..DuOpts::new(2)
    };
    let usage = du_dir(temp.path(), &opts).unwrap();
    assert_eq!(usage.total_bytes, TREE_TOTAL);
    assert_eq!(usage.skipped_entries, 1);
}
