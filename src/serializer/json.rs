//! JSON serializer
//!
//! Pretty-printed, two-space indented JSON with a trailing newline so the
//! record files stay readable and diff cleanly.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{FolioError, Result};

use super::Serializer;

/// Default codec: indented JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for JsonSerializer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let mut bytes =
            serde_json::to_vec_pretty(value).map_err(|e| FolioError::Encode(e.to_string()))?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|e| FolioError::Decode(e.to_string()))
    }
}
