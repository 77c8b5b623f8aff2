//! Catalog error types.
//!
//! An unknown field name is a host programming error, never user input
//! gone wrong, so it surfaces as a hard `Err` rather than a validation
//! message.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by field catalog lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Field name is not registered in the catalog
    #[error("Unknown field '{0}'")]
    UnknownField(String),
}

impl CatalogError {
    /// Create an unknown-field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_display() {
        let err = CatalogError::unknown_field("favoriteColor");
        assert_eq!(err.to_string(), "Unknown field 'favoriteColor'");
    }
}
