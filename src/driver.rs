//! Driver Module
//!
//! The public entry point that coordinates storage and locking.
//!
//! ## Responsibilities
//! - Serialize mutations (write/delete) per collection via `LockManager`
//! - Pass reads straight through to storage
//! - Run predicate queries over full-collection scans

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::lock::LockManager;
use crate::serializer::Serializer;
use crate::storage::{FileStore, Storage};

/// Document store driver
///
/// ## Concurrency Model: per-collection single writer, unsynchronized readers
///
/// - **Mutations** (write/delete): serialized by the collection's lock
///   - At most one mutation per collection at a time
///   - Different collections proceed in parallel
///   - The guard is dropped on every return path, including errors
///
/// - **Reads** (read/read_all/query): no locking
///   - A single record is never observed half-written (atomic rename)
///   - A scan is NOT a snapshot: records may change between the directory
///     listing and the file reads
///
/// Drivers that should exclude each other must share one `Arc<LockManager>`.
pub struct Driver<S: Storage = FileStore> {
    /// Record storage
    store: S,

    /// Registry of per-collection locks (may be shared with other drivers)
    locks: Arc<LockManager>,
}

impl Driver<FileStore> {
    /// Open a file-backed JSON store with the given config
    pub fn open(config: Config) -> Result<Self> {
        let store = FileStore::open(&config)?;
        Ok(Self::new(store, Arc::new(LockManager::new())))
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }
}

impl<S: Storage> Driver<S> {
    /// Wrap a store and a lock registry
    pub fn new(store: S, locks: Arc<LockManager>) -> Self {
        Self { store, locks }
    }

    /// Create or replace a record
    ///
    /// Holds the collection lock for the duration of the storage write.
    pub fn write<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        resource: &str,
        value: &T,
    ) -> Result<()> {
        let lock = self.locks.get_lock(collection);
        let _guard = lock.lock();

        self.store.write(collection, resource, value)
    }

    /// Remove a record
    ///
    /// Same locking discipline as `write`.
    pub fn delete(&self, collection: &str, resource: &str) -> Result<()> {
        let lock = self.locks.get_lock(collection);
        let _guard = lock.lock();

        self.store.delete(collection, resource)
    }

    /// Read a single record as `T` (no locking)
    pub fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> Result<T> {
        self.store.read(collection, resource)
    }

    /// Raw payloads of every record in a collection (no locking)
    pub fn read_all(&self, collection: &str) -> Result<Vec<Vec<u8>>> {
        self.store.read_all(collection)
    }

    /// Decode every record in a collection as `T`
    ///
    /// Fails as a whole if any record does not decode.
    pub fn read_all_as<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let codec = self.store.codec();

        self.store
            .read_all(collection)?
            .iter()
            .map(|bytes| codec.decode(bytes))
            .collect()
    }

    /// Records of a collection for which `predicate` holds
    ///
    /// Every record is decoded into a `Document` first; a single decode
    /// failure fails the whole query and no partial result is returned.
    /// Matches keep the relative order of `read_all`.
    pub fn query<F>(&self, collection: &str, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(&Document) -> bool,
    {
        self.query_as(collection, predicate)
    }

    /// Typed variant of `query`
    pub fn query_as<T, F>(&self, collection: &str, predicate: F) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let records: Vec<T> = self.read_all_as(collection)?;
        let scanned = records.len();

        let matches: Vec<T> = records.into_iter().filter(|record| predicate(record)).collect();

        tracing::trace!(
            "Query on '{}' matched {} of {} records",
            collection,
            matches.len(),
            scanned
        );
        Ok(matches)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the shared lock registry
    pub fn lock_manager(&self) -> &Arc<LockManager> {
        &self.locks
    }
}
