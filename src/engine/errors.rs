//! Evaluator error types.
//!
//! Evaluation is a total function over well-formed input: it returns a
//! complete report or raises one of these programming errors. There is
//! no partial-failure or retry concept.

use thiserror::Error;

/// Result type for evaluator operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by the evaluator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Scope names a field absent from the catalog
    #[error("Unknown field '{0}' in scope")]
    UnknownField(String),
}

impl EngineError {
    /// Create an unknown-field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}
