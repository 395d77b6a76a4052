//! Lock Module
//!
//! Per-collection mutual exclusion for mutating operations.
//!
//! ## Responsibilities
//! - Hand out one mutex per collection name, created lazily
//! - Guarantee lock identity: the same name always maps to the same mutex
//! - Keep registry contention O(1) per call, independent of how long the
//!   returned lock is held
//!
//! ## Layout
//! ```text
//! LockManager
//! └── registry: Mutex<HashMap<String, Arc<Mutex<()>>>>
//!        │            held only for lookup-or-insert
//!        ├── "users"  → Arc<Mutex<()>>   held across one storage write/delete
//!        └── "orders" → Arc<Mutex<()>>
//! ```

mod manager;

pub use manager::{CollectionLock, LockManager};
