//! # FolioDB
//!
//! A minimal file-backed document store with:
//! - One JSON file per record, one directory per collection
//! - Atomic single-record writes (temp file + rename)
//! - Per-collection mutual exclusion for mutations
//! - Predicate queries over full-collection scans
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Driver                              │
//! │        write/delete: locked   read/read_all/query: not       │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │                              │
//!                ▼                              ▼
//!   ┌─────────────────────────┐     ┌─────────────────────────┐
//!   │      LockManager        │     │        Storage          │
//!   │ name → Arc<Mutex<()>>   │     │  (FileStore, atomic     │
//!   └─────────────────────────┘     │   temp + rename)        │
//!                                   └────────────┬────────────┘
//!                                                │
//!                                                ▼
//!                                   ┌─────────────────────────┐
//!                                   │       Serializer        │
//!                                   │     (JSON codec)        │
//!                                   └─────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use foliodb::{document, Driver};
//! use serde_json::json;
//!
//! # fn main() -> foliodb::Result<()> {
//! let db = Driver::open_path(std::path::Path::new("./data"))?;
//! db.write("users", "Doe", &json!({ "Name": "Doe", "Age": 30 }))?;
//!
//! let thirty = db.query("users", |doc| document::lookup_f64(doc, "Age") == Some(30.0))?;
//! assert_eq!(thirty.len(), 1);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod serializer;
pub mod document;
pub mod storage;
pub mod lock;
pub mod driver;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FolioError, Result};
pub use config::{Config, SyncStrategy};
pub use document::{Document, Value};
pub use driver::Driver;
pub use lock::LockManager;
pub use serializer::{JsonSerializer, Serializer};
pub use storage::{FileStore, Storage};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FolioDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
