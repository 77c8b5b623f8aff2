//! Read-only view of a record at one evaluation instant.
//!
//! The snapshot pairs a borrowed record with the reference clock so
//! that every condition and check in one `evaluate` call sees the same
//! data and the same "today".

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::derived::age_in_years;
use crate::record::{Record, Value};

/// Borrowed record plus the evaluation clock.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    record: &'a Record,
    as_of: NaiveDate,
}

impl<'a> Snapshot<'a> {
    /// Creates a snapshot of `record` as of the given date.
    pub fn new(record: &'a Record, as_of: NaiveDate) -> Self {
        Self { record, as_of }
    }

    /// The reference clock for this evaluation.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Text content of a field, if defined and textual.
    pub fn text(&self, field: &str) -> Option<&'a str> {
        self.record.get(field).and_then(Value::as_text)
    }

    /// Numeric content of a field, if defined and numeric.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.record.get(field).and_then(Value::as_number)
    }

    /// Boolean content of a field, if defined and boolean.
    pub fn boolean(&self, field: &str) -> Option<bool> {
        self.record.get(field).and_then(Value::as_bool)
    }

    /// Date content of a field, if defined and a date.
    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        self.record.get(field).and_then(Value::as_date)
    }

    /// Selection set content of a field, if defined and a set.
    pub fn text_set(&self, field: &str) -> Option<&'a BTreeSet<String>> {
        self.record.get(field).and_then(Value::as_text_set)
    }

    /// Number map content of a field, if defined and a map.
    pub fn number_map(&self, field: &str) -> Option<&'a BTreeMap<String, f64>> {
        self.record.get(field).and_then(Value::as_number_map)
    }

    /// Derived fact: applicant age in whole years, when the date of
    /// birth is defined. Recomputed on every call.
    pub fn age(&self) -> Option<i32> {
        self.date(crate::catalog::fields::DOB)
            .map(|dob| age_in_years(dob, self.as_of))
    }
}
