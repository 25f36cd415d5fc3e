//! Per-record locks serializing read-modify-write cycles in handlers.
//!
//! A handler loads a record, mutates it in the domain layer and commits it
//! back. Two handlers doing that concurrently on the same record would lose
//! one update, so each handler first acquires the locks of the records it
//! will write.
//!
//! Acquisition order is fixed: person, then category, then event, then
//! tickets (ascending id). Every handler follows it, so no two handlers can
//! wait on each other.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex as StdMutex, PoisonError, Weak};

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::{CategoryId, EventId, PersonId, TicketId};

/// Held lock on one record. Released on drop.
pub type RecordGuard = OwnedMutexGuard<()>;

/// Lazily created async mutexes keyed by record id.
///
/// Entries only live while someone holds or waits on them; dead entries are
/// pruned whenever a new lock is handed out.
#[derive(Debug)]
pub struct LockRegistry<K> {
    locks: StdMutex<HashMap<K, Weak<Mutex<()>>>>,
}

impl<K> Default for LockRegistry<K> {
    fn default() -> Self {
        Self {
            locks: StdMutex::new(HashMap::new()),
        }
    }
}

impl<K> LockRegistry<K>
where
    K: Copy + Eq + Hash + Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, key: K) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(lock) = locks.get(&key).and_then(Weak::upgrade) {
            return lock;
        }
        locks.retain(|_, weak| weak.strong_count() > 0);
        let lock = Arc::new(Mutex::new(()));
        locks.insert(key, Arc::downgrade(&lock));
        lock
    }

    /// Waits for exclusive access to `key`.
    pub async fn acquire(&self, key: K) -> RecordGuard {
        self.lock_for(key).lock_owned().await
    }

    /// Waits for exclusive access to every key, taken in ascending order.
    pub async fn acquire_all(&self, keys: impl IntoIterator<Item = K>) -> Vec<RecordGuard> {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();

        let mut guards = Vec::with_capacity(keys.len());
        for key in keys {
            guards.push(self.acquire(key).await);
        }
        guards
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        let locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.values().filter(|weak| weak.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lock registries shared by all ticketing handlers.
#[derive(Debug, Default)]
pub struct TicketingLocks {
    pub persons: LockRegistry<PersonId>,
    pub categories: LockRegistry<CategoryId>,
    pub events: LockRegistry<EventId>,
    pub tickets: LockRegistry<TicketId>,
}

impl TicketingLocks {
    pub fn new() -> Self {
        Self::default()
    }
}
