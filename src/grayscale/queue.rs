//! Bounded work queue shared by the row-pull workers.

use crossbeam::channel::{self, Receiver};

/// A multi-consumer queue that is fully loaded and closed before any
/// consumer starts.
///
/// Claims block until an item is available and return `None` only once the
/// queue is both drained and closed, so "momentarily empty" and "no more
/// work" can never be confused.
pub struct WorkQueue<T> {
    rx: Receiver<T>,
}

impl<T> WorkQueue<T> {
    /// Create a queue holding `items` in order, then close it.
    pub fn preloaded(items: Vec<T>) -> Self {
        let (tx, rx) = channel::bounded(items.len());
        for item in items {
            // Capacity equals the item count and the receiver is alive.
            let sent = tx.try_send(item);
            debug_assert!(sent.is_ok());
        }
        // Dropping the only sender closes the queue.
        drop(tx);
        WorkQueue { rx }
    }

    /// Claim the next item, FIFO by queue position.
    ///
    /// Each item is delivered to at most one caller.
    pub fn claim(&self) -> Option<T> {
        self.rx.recv().ok()
    }

    /// Items still waiting to be claimed.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::thread;

    #[test]
    fn test_claims_in_fifo_order() {
        let queue = WorkQueue::preloaded(vec![0, 1, 2]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.claim(), Some(0));
        assert_eq!(queue.claim(), Some(1));
        assert_eq!(queue.claim(), Some(2));
    }

    #[test]
    fn test_drained_queue_reports_none() {
        let queue = WorkQueue::preloaded(vec![7]);
        assert_eq!(queue.claim(), Some(7));
        assert!(queue.is_empty());
        assert_eq!(queue.claim(), None);
        assert_eq!(queue.claim(), None);
    }

    #[test]
    fn test_empty_queue_is_closed_immediately() {
        let queue: WorkQueue<usize> = WorkQueue::preloaded(Vec::new());
        assert_eq!(queue.claim(), None);
    }

    #[test]
    fn test_concurrent_claims_deliver_each_item_once() {
        let queue = WorkQueue::preloaded((0..1000).collect());
        let seen = Mutex::new(Vec::new());

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    while let Some(item) = queue.claim() {
                        seen.lock().unwrap().push(item);
                    }
                });
            }
        });

        let mut seen = seen.into_inner().unwrap();
        seen.sort_unstable();
        assert_eq!(seen, (0..1000).collect::<Vec<_>>());
    }
}
