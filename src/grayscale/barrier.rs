//! Completion barrier: blocks the initiator until a known number of
//! obligations have been signalled.

use std::sync::{Condvar, Mutex, PoisonError};

/// Counts outstanding obligations and releases waiters when it reaches zero.
///
/// The unit of an obligation is up to the caller (a row, a worker). Each
/// engine owns its own barrier.
#[derive(Debug)]
pub struct CompletionBarrier {
    pending: Mutex<usize>,
    released: Condvar,
}

impl CompletionBarrier {
    pub fn new(pending: usize) -> Self {
        CompletionBarrier {
            pending: Mutex::new(pending),
            released: Condvar::new(),
        }
    }

    /// Signal one completed obligation.
    pub fn done(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        debug_assert!(*pending > 0, "more completions than obligations");
        *pending = pending.saturating_sub(1);
        if *pending == 0 {
            self.released.notify_all();
        }
    }

    /// Block until every obligation has been signalled.
    pub fn wait(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        while *pending > 0 {
            pending = self
                .released
                .wait(pending)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Obligations not yet signalled.
    pub fn pending(&self) -> usize {
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
