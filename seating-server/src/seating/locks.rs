//! Keyed async locks
//!
//! Serializes read-check-write sequences that touch the same guest or table.
//! Callers that need both take the guest lock before the table lock.
//!
//! An entry lives only while someone holds or waits for its key, so ids
//! that never resolve to a record do not accumulate.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = DashMap<String, Arc<Mutex<()>>>;

#[derive(Debug, Clone, Default)]
pub struct LockRegistry {
    locks: Arc<LockMap>,
}

/// Exclusive access to one key; prunes the registry entry on drop
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct KeyGuard {
    guard: Option<OwnedMutexGuard<()>>,
    key: String,
    locks: Arc<LockMap>,
}

impl Drop for KeyGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Waiters hold a clone of the Arc, so a count of one means the map is the last owner
        self.locks
            .remove_if(&self.key, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `key`. The lock is released when the guard drops.
    pub async fn acquire(&self, key: &str) -> KeyGuard {
        // Clone the Arc out so the DashMap shard is not held across the await
        let lock = self
            .locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock_owned().await;
        KeyGuard {
            guard: Some(guard),
            key: key.to_string(),
            locks: self.locks.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

pub fn guest_key(id: &str) -> String {
    format!("guest:{id}")
}

pub fn table_key(id: &str) -> String {
    format!("table:{id}")
}
