//! Optional serialization of read-modify-write cycles
//!
//! Without a queue, two concurrent mutations each load the collection, apply
//! their change, and save; the second save discards the first change. When
//! enabled, every mutating handler holds the permit for its whole cycle.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// Single-slot queue for mutations. Cloning shares the slot.
#[derive(Debug, Clone, Default)]
pub struct MutationQueue {
    slot: Option<Arc<Mutex<()>>>,
}

impl MutationQueue {
    /// Queue that lets every mutation through immediately (last save wins)
    pub fn disabled() -> Self {
        Self { slot: None }
    }

    /// Queue that admits one mutation at a time
    pub fn serialized() -> Self {
        Self {
            slot: Some(Arc::new(Mutex::new(()))),
        }
    }

    pub fn is_serialized(&self) -> bool {
        self.slot.is_some()
    }

    /// Wait for this request's turn. Hold the permit until the save completes.
    pub async fn acquire(&self) -> Option<MutexGuard<'_, ()>> {
        match &self.slot {
            Some(slot) => Some(slot.lock().await),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn disabled_queue_never_blocks() {
        let queue = MutationQueue::disabled();
        let first = queue.acquire().await;
        let second = queue.acquire().await;
        assert!(first.is_none());
        assert!(second.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn serialized_queue_admits_one_at_a_time() {
        let queue = MutationQueue::serialized();
        let permit = queue.acquire().await;
        assert!(permit.is_some());

        let waiting = tokio::time::timeout(Duration::from_millis(50), queue.acquire()).await;
        assert!(waiting.is_err());

        drop(permit);
        assert!(queue.acquire().await.is_some());
    }
}
