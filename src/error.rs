//! Error types for FolioDB
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Unified error type for FolioDB operations
#[derive(Debug, Error)]
pub enum FolioError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    /// Record (or whole collection when `resource` is `None`) does not exist
    #[error("{}", not_found_message(.collection, .resource))]
    NotFound {
        collection: String,
        resource: Option<String>,
    },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),
}

impl FolioError {
    pub(crate) fn collection_not_found(collection: &str) -> Self {
        FolioError::NotFound {
            collection: collection.to_string(),
            resource: None,
        }
    }

    pub(crate) fn record_not_found(collection: &str, resource: &str) -> Self {
        FolioError::NotFound {
            collection: collection.to_string(),
            resource: Some(resource.to_string()),
        }
    }

    /// True for both missing records and missing collections
    pub fn is_not_found(&self) -> bool {
        matches!(self, FolioError::NotFound { .. })
    }
}

fn not_found_message(collection: &str, resource: &Option<String>) -> String {
    match resource {
        Some(resource) => format!("Record not found: {}/{}", collection, resource),
        None => format!("Collection not found: {}", collection),
    }
}
