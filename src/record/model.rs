//! The mutable onboarding record.
//!
//! The record maps field names to values and tracks a dirty flag. It
//! is owned by the host and passed by reference into the evaluator,
//! which never mutates it.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value as Json;

use super::errors::{RecordError, RecordResult};
use super::value::Value;
use crate::catalog::{CatalogError, CatalogResult, FieldCatalog, FieldKind};

/// One onboarding session's in-progress field values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: BTreeMap<String, Value>,
    dirty: bool,
}

impl Record {
    /// Creates an empty record with every field undefined.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the session-start record, populated with each field's
    /// catalog default. Fields without a default start absent.
    pub fn with_defaults(catalog: &FieldCatalog) -> Self {
        let values = catalog
            .descriptors()
            .filter_map(|d| d.default.clone().map(|v| (d.name.to_string(), v)))
            .collect();
        Self {
            values,
            dirty: false,
        }
    }

    /// Decodes a record from host JSON, checking every key against the
    /// catalog and every value against the field's declared kind.
    ///
    /// The resulting record is clean: it represents a loaded snapshot,
    /// not pending edits.
    pub fn from_json(catalog: &FieldCatalog, json: &Json) -> RecordResult<Self> {
        let obj = json
            .as_object()
            .ok_or_else(|| RecordError::NotAnObject(json_type_name(json).to_string()))?;

        let mut record = Record::with_defaults(catalog);
        for (key, raw) in obj {
            let descriptor = catalog.describe(key)?;
            if raw.is_null() {
                // Null clears the default: the field is undefined.
                record.values.remove(key);
                continue;
            }
            let value = decode_value(key, descriptor.kind, raw)?;
            record.values.insert(key.clone(), value);
        }
        record.dirty = false;
        Ok(record)
    }

    /// Returns the current value of a field, or `None` if undefined.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Sets a field value, marking the record dirty.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownField` for names absent from the
    /// catalog; the record is unchanged in that case.
    pub fn set(
        &mut self,
        catalog: &FieldCatalog,
        field: &str,
        value: impl Into<Value>,
    ) -> CatalogResult<()> {
        if !catalog.contains(field) {
            return Err(CatalogError::unknown_field(field));
        }
        self.values.insert(field.to_string(), value.into());
        self.dirty = true;
        Ok(())
    }

    /// Clears a field back to undefined, marking the record dirty.
    ///
    /// Returns the previous value, if any.
    pub fn clear(&mut self, catalog: &FieldCatalog, field: &str) -> CatalogResult<Option<Value>> {
        if !catalog.contains(field) {
            return Err(CatalogError::unknown_field(field));
        }
        self.dirty = true;
        Ok(self.values.remove(field))
    }

    /// Whether the record has been mutated since the last `mark_clean`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Resets the dirty flag, e.g. after the host persists a draft.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Field names currently holding a value, in lexical order.
    pub fn defined_fields(&self) -> BTreeSet<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    /// Number of defined fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field is defined.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Decodes one JSON value as the given field kind.
fn decode_value(field: &str, kind: FieldKind, raw: &Json) -> RecordResult<Value> {
    let mismatch = |expected| {
        RecordError::type_mismatch(field, expected, json_type_name(raw))
    };

    match kind {
        FieldKind::Text
        | FieldKind::Email
        | FieldKind::Phone
        | FieldKind::Enum
        | FieldKind::TimeOfDay => raw
            .as_str()
            .map(Value::text)
            .ok_or_else(|| mismatch("text")),
        FieldKind::Date => {
            let s = raw.as_str().ok_or_else(|| mismatch("date (YYYY-MM-DD)"))?;
            s.parse()
                .map(Value::Date)
                .map_err(|_| RecordError::type_mismatch(field, "date (YYYY-MM-DD)", s))
        }
        FieldKind::Number => raw
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| mismatch("number")),
        FieldKind::Bool => raw
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| mismatch("bool")),
        FieldKind::MultiSelect => {
            let arr = raw.as_array().ok_or_else(|| mismatch("array of text"))?;
            let mut set = BTreeSet::new();
            for item in arr {
                let s = item
                    .as_str()
                    .ok_or_else(|| {
                        RecordError::type_mismatch(field, "array of text", json_type_name(item))
                    })?;
                set.insert(s.to_string());
            }
            Ok(Value::TextSet(set))
        }
        FieldKind::NumberMap => {
            let obj = raw.as_object().ok_or_else(|| mismatch("object of numbers"))?;
            let mut map = BTreeMap::new();
            for (key, item) in obj {
                let n = item.as_f64().ok_or_else(|| {
                    RecordError::type_mismatch(field, "object of numbers", json_type_name(item))
                })?;
                map.insert(key.clone(), n);
            }
            Ok(Value::NumberMap(map))
        }
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "text",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
