//! Serializer Module
//!
//! Pure encode/decode of in-memory values to and from byte payloads.
//!
//! ## Responsibilities
//! - Turn any `Serialize` value into the bytes stored in a record file
//! - Turn stored bytes back into a typed value
//! - Name the file extension records are stored under
//!
//! Serializers are stateless. The storage layer owns one and uses it for
//! every record, so swapping the codec never touches the atomic-write logic.

mod json;

pub use json::JsonSerializer;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Codec used by the storage layer
///
/// Encode failures surface as `FolioError::Encode`, decode failures as
/// `FolioError::Decode`.
pub trait Serializer: Send + Sync {
    /// File extension (without the dot) for records written by this codec
    fn extension(&self) -> &'static str;

    /// Serialize a value into a complete record payload
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>>;

    /// Deserialize a record payload into the requested shape
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T>;
}
