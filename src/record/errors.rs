//! Record error types.
//!
//! These cover malformed host input when decoding a record from JSON.
//! Validation failures are never record errors; they live in the
//! evaluator's report.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised when building or mutating a record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Key does not correspond to a catalog entry
    #[error(transparent)]
    UnknownField(#[from] CatalogError),

    /// JSON value does not decode as the field's declared kind
    #[error("Field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: String,
    },

    /// Record JSON was not an object
    #[error("Record must be a JSON object, got {0}")]
    NotAnObject(String),
}

impl RecordError {
    /// Create a type mismatch error
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual: actual.into(),
        }
    }
}
