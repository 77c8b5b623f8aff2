//! Typed field values.
//!
//! A value is one of: text, number, boolean, calendar date, set of
//! option strings, or a mapping from option string to number. Absence
//! is modeled by the record, not by a value variant.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

/// A single field value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Calendar date, serialized as `YYYY-MM-DD`
    Date(NaiveDate),
    /// Text
    Text(String),
    /// Set of selected option strings
    TextSet(BTreeSet<String>),
    /// Mapping from option string to number
    NumberMap(BTreeMap<String, f64>),
}

impl Value {
    /// Text value helper
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Empty selection set
    pub fn empty_set() -> Self {
        Value::TextSet(BTreeSet::new())
    }

    /// Empty number map
    pub fn empty_map() -> Self {
        Value::NumberMap(BTreeMap::new())
    }

    /// Selection set from option names
    pub fn set_of<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::TextSet(items.into_iter().map(Into::into).collect())
    }

    /// Number map from (key, value) pairs
    pub fn map_of<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Value::NumberMap(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns the value type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Date(_) => "date",
            Value::Text(_) => "text",
            Value::TextSet(_) => "text_set",
            Value::NumberMap(_) => "number_map",
        }
    }

    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean content, if this is a flag
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Date content, if this is a date
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Selection set content, if this is a set
    pub fn as_text_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            Value::TextSet(s) => Some(s),
            _ => None,
        }
    }

    /// Number map content, if this is a map
    pub fn as_number_map(&self) -> Option<&BTreeMap<String, f64>> {
        match self {
            Value::NumberMap(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_to_natural_json() {
        let date = NaiveDate::from_ymd_opt(1999, 4, 12).unwrap();
        assert_eq!(serde_json::to_value(Value::Date(date)).unwrap(), json!("1999-04-12"));
        assert_eq!(serde_json::to_value(Value::text("hi")).unwrap(), json!("hi"));
        assert_eq!(
            serde_json::to_value(Value::set_of(["SQL", "Go"])).unwrap(),
            json!(["Go", "SQL"])
        );
        assert_eq!(
            serde_json::to_value(Value::map_of([("SQL", 3.0)])).unwrap(),
            json!({"SQL": 3.0})
        );
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        let v = Value::Number(5.0);
        assert_eq!(v.as_number(), Some(5.0));
        assert!(v.as_text().is_none());
        assert!(v.as_date().is_none());
        assert_eq!(v.type_name(), "number");
    }
}
