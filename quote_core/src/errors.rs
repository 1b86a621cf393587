//! # Error Types
//!
//! Structured error types for quote_core. Every variant carries enough
//! context for a front-end to explain the problem to the user and recover
//! programmatically; nothing in the engine is fatal.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::errors::{QuoteError, QuoteResult};
//!
//! fn validate_area(area: f64) -> QuoteResult<()> {
//!     if area <= 0.0 {
//!         return Err(QuoteError::InvalidInput {
//!             field: "area".to_string(),
//!             value: area.to_string(),
//!             reason: "Area must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for quote_core operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Structured error type for quotation operations.
///
/// Each variant provides specific context about what went wrong. Note that
/// malformed line *overrides* never produce an error: overrides are
/// best-effort corrections and invalid values silently fall back to the
/// computed ones (see [`crate::overrides`]).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuoteError {
    /// An input value is invalid (non-positive dimension, NaN, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An area cannot be derived from the given quantity unit.
    ///
    /// This is a rejection signal, not a fault: the caller should ask the
    /// user for a different input style (dimensions or direct area).
    #[error("Cannot derive a {category} area from quantity unit '{unit}'")]
    UnsupportedDerivation { category: String, unit: String },

    /// No quotation item exists with the given id
    #[error("No quotation item with id {id}")]
    ItemNotFound { id: u64 },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Snapshot file schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl QuoteError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QuoteError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedDerivation error
    pub fn unsupported_derivation(category: impl Into<String>, unit: impl Into<String>) -> Self {
        QuoteError::UnsupportedDerivation {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Create an ItemNotFound error
    pub fn item_not_found(id: u64) -> Self {
        QuoteError::ItemNotFound { id }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QuoteError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check whether this error is a rejection signal rather than a fault.
    ///
    /// Rejections ask the caller to change the request (different input
    /// style, different id); faults indicate a broken environment or file.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            QuoteError::InvalidInput { .. }
                | QuoteError::UnsupportedDerivation { .. }
                | QuoteError::ItemNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::InvalidInput { .. } => "INVALID_INPUT",
            QuoteError::UnsupportedDerivation { .. } => "UNSUPPORTED_DERIVATION",
            QuoteError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            QuoteError::FileError { .. } => "FILE_ERROR",
            QuoteError::SerializationError { .. } => "SERIALIZATION_ERROR",
            QuoteError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
