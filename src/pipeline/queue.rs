//! Directory work queue: unbounded item transfer plus a separate drain barrier.
//!
//! [`WorkQueue`] moves [`WorkItem`]s from the coordinator to workers. Every `put` registers one
//! pending item on the shared [`DrainBarrier`]; consumers acknowledge with `mark_done` once they
//! finish an item. `wait_until_drained` returns only when every item put so far has been
//! acknowledged, not merely received.

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::warn;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use crate::WorkItem;

/// Counts items that were put but not yet acknowledged. Wakes all waiters when it reaches zero.
#[derive(Debug, Default)]
pub struct DrainBarrier {
    pending: Mutex<usize>,
    drained: Condvar,
}

impl DrainBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking holder can only leave a valid counter behind, so poison is ignored.
    fn lock(&self) -> MutexGuard<'_, usize> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register one more outstanding item.
    pub fn add(&self) {
        *self.lock() += 1;
    }

    /// Acknowledge one item. Extra acknowledgements are ignored with a warning.
    pub fn mark_done(&self) {
        let mut pending = self.lock();
        if *pending == 0 {
            warn!("mark_done called more times than items were put");
            return;
        }
        *pending -= 1;
        if *pending == 0 {
            self.drained.notify_all();
        }
    }

    /// Block until every registered item has been acknowledged. Returns at once if none are pending.
    pub fn wait_until_drained(&self) {
        let mut pending = self.lock();
        while *pending > 0 {
            pending = self
                .drained
                .wait(pending)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Items put but not yet acknowledged.
    pub fn pending(&self) -> usize {
        *self.lock()
    }
}

/// Unbounded MPMC queue of [`WorkItem`]s with join semantics. Cheap to clone; clones share state.
#[derive(Clone, Debug)]
pub struct WorkQueue {
    tx: Sender<WorkItem>,
    rx: Receiver<WorkItem>,
    barrier: Arc<DrainBarrier>,
}

impl Default for WorkQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            tx,
            rx,
            barrier: Arc::new(DrainBarrier::new()),
        }
    }

    /// Enqueue `item`. Never blocks.
    pub fn put(&self, item: WorkItem) {
        self.barrier.add();
        // Each queue handle owns a receiver, so the channel cannot be disconnected here.
        if self.tx.send(item).is_err() {
            self.barrier.mark_done();
        }
    }

    /// Block until an item is available and take it.
    pub fn get(&self) -> WorkItem {
        // Disconnection is impossible while `self.tx` lives; treat it as the end of work anyway.
        self.rx.recv().unwrap_or(WorkItem::Stop)
    }

    /// Acknowledge one item previously returned by [`get`](Self::get).
    pub fn mark_done(&self) {
        self.barrier.mark_done();
    }

    /// Block until every item ever put has been acknowledged.
    pub fn wait_until_drained(&self) {
        self.barrier.wait_until_drained();
    }

    /// The drain barrier on its own, for callers that only wait and never transfer items.
    pub fn barrier(&self) -> Arc<DrainBarrier> {
        Arc::clone(&self.barrier)
    }

    /// Items currently waiting to be taken (not counting ones being processed).
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
