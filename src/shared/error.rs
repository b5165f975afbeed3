//! Shared Error Types
//!
//! Error types used on both sides of the view/data-access boundary.
//!
//! # Error Categories
//!
//! - `ValidationError` - pre-submit form validation failures
//! - `DecodeError` - backend documents that fail the schema boundary
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Errors shared between the views and the data-access layer
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Pre-submit form validation failure
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A backend document did not satisfy the expected schema
    #[error("Decode error: {message}")]
    DecodeError {
        /// Human-readable error message
        message: String,
    },

    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeError {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}
