use log::debug;

/// Report skipped entries once per run, after all workers are joined.
/// Individual paths are never logged; a skip is not an error.
pub fn report_skipped_entries(skipped: u64) {
    if skipped > 0 {
        debug!(
            "Skipped {} entries due to permission errors or access issues",
            skipped
        );
    }
}
