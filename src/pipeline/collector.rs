//! Result collector: workers push one [`PartialResult`] per subtree; the coordinator drains them.

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::PartialResult;

/// Unordered MPMC collector of partial results. Clones share the same channel.
#[derive(Clone, Debug)]
pub struct ResultCollector {
    tx: Sender<PartialResult>,
    rx: Receiver<PartialResult>,
}

impl Default for ResultCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultCollector {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Record one subtree's result. Never blocks.
    pub fn push(&self, partial: PartialResult) {
        // The collector holds its own receiver, so send cannot fail.
        let _ = self.tx.send(partial);
    }

    /// Take every result pushed so far and fold them into one. Call after all workers are joined.
    pub fn drain(&self) -> (PartialResult, usize) {
        self.rx.try_iter().fold(
            (PartialResult::default(), 0_usize),
            |(acc, count), p| {
                (
                    PartialResult {
                        bytes: acc.bytes + p.bytes,
                        skipped: acc.skipped + p.skipped,
                    },
                    count + 1,
                )
            },
        )
    }
}
