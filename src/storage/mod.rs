//! Storage Module
//!
//! File-backed record storage: one file per record, one directory per
//! collection.
//!
//! ## Responsibilities
//! - Map `(collection, resource)` to a file on disk
//! - Own the directory layout
//! - Make single-record writes atomic (temp file + rename)
//! - Enumerate whole collections for scans
//!
//! ## Layout
//! ```text
//! {root}/
//! ├── users/
//! │   ├── John.json
//! │   ├── Doe.json
//! │   └── Smith.json.tmp     ← only while a write is in flight (or after a crash)
//! └── orders/
//!     └── 1001.json
//! ```
//!
//! ## Write Protocol
//! ```text
//! encode(value) ──► create_dir_all(collection) ──► write {resource}.json.tmp
//!                                                        │ (fsync if EveryWrite)
//!                                                        ▼
//!                                     rename {resource}.json.tmp → {resource}.json
//! ```
//! The rename is the commit point. A reader sees either the previous
//! complete file or the new complete file, never a mix. A leftover `.tmp`
//! from a crash is not a record and is ignored by every operation.

mod file_store;

pub use file_store::FileStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::serializer::Serializer;

/// Record store keyed by collection and resource
///
/// Implementations are shared across threads; every method takes `&self`.
/// Storage does no locking of its own: callers that mutate the same
/// collection concurrently must serialize through the `LockManager`
/// (which is what `Driver` does).
pub trait Storage: Send + Sync {
    /// Codec records are written with
    type Codec: Serializer;

    /// Access the codec (used to decode raw payloads from `read_all`)
    fn codec(&self) -> &Self::Codec;

    /// Atomically create or replace a record
    fn write<T: Serialize + ?Sized>(&self, collection: &str, resource: &str, value: &T)
        -> Result<()>;

    /// Read and decode a single record
    ///
    /// Fails with `NotFound` if the record does not exist.
    fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> Result<T>;

    /// Raw payloads of every record in a collection, in directory order
    ///
    /// Fails with `NotFound` if the collection does not exist. The order is
    /// whatever the filesystem enumerates and must not be relied upon.
    fn read_all(&self, collection: &str) -> Result<Vec<Vec<u8>>>;

    /// Remove a record
    ///
    /// Fails with `NotFound` if the record does not exist.
    fn delete(&self, collection: &str, resource: &str) -> Result<()>;
}
