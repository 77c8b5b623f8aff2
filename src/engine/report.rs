//! The validation report.
//!
//! A mapping from field name to the ordered list of failure messages
//! collected for it. An empty report means every checked field is
//! valid; a field absent from the report was either valid or outside
//! the requested scope.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field-keyed validation failure messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a failure message for a field, preserving insertion
    /// order among that field's messages.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Whether every checked field passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages collected for a field; empty when the field passed or
    /// was not checked.
    pub fn messages_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Fields with at least one failure, in lexical order.
    pub fn failed_fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Total number of failure messages.
    pub fn message_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Iterates (field, messages) pairs in lexical field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages_accumulate_in_order() {
        let mut report = ValidationReport::new();
        report.add("email", "Email is required");
        report.add("email", "Invalid email address");

        assert!(!report.is_valid());
        assert_eq!(
            report.messages_for("email"),
            &["Email is required", "Invalid email address"]
        );
        assert_eq!(report.message_count(), 2);
    }

    #[test]
    fn test_unchecked_field_has_no_messages() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert!(report.messages_for("salary").is_empty());
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let mut report = ValidationReport::new();
        report.add("salary", "Annual salary must be between $30,000 and $200,000");
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"salary": ["Annual salary must be between $30,000 and $200,000"]})
        );
    }
}
