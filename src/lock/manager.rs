//! Lock Manager
//!
//! Registry of collection locks shared by every driver that wraps it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Mutex guarding mutations of one collection
pub type CollectionLock = Arc<Mutex<()>>;

/// Registry mapping collection names to their locks
///
/// ## Concurrency:
/// - `locks`: guarded by its own Mutex, held only for the lookup-or-insert
/// - Returned locks are independent of the registry guard
/// - Entries are never removed, so a name's lock never changes identity
pub struct LockManager {
    locks: Mutex<HashMap<String, CollectionLock>>,
}

impl LockManager {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Get the lock for a collection, creating it on first use
    pub fn get_lock(&self, collection: &str) -> CollectionLock {
        let mut locks = self.locks.lock();

        if let Some(lock) = locks.get(collection) {
            return Arc::clone(lock);
        }

        tracing::trace!("Creating lock for collection '{}'", collection);
        let lock = Arc::new(Mutex::new(()));
        locks.insert(collection.to_string(), Arc::clone(&lock));
        lock
    }

    /// Whether a lock has been created for this collection
    pub fn contains(&self, collection: &str) -> bool {
        self.locks.lock().contains_key(collection)
    }

    /// Number of registered collection locks
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    /// Check if no lock has been handed out yet
    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }
}

impl Default for LockManager {
    fn default() -> Self {
        Self::new()
    }
}
