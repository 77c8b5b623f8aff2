//! The validation evaluator.
//!
//! One generic loop interprets the declarative rule table: intersect
//! targets with the scope, re-evaluate the applicability condition
//! against the live snapshot, run the check, collect failures.

use chrono::{Local, NaiveDate};

use crate::catalog::FieldCatalog;
use crate::record::Record;
use crate::rules::{rule_set, Applicability, Snapshot};

use super::errors::{EngineError, EngineResult};
use super::report::ValidationReport;
use super::scope::Scope;

/// Evaluator backed by the field catalog.
///
/// Evaluation is deterministic given the record snapshot and the
/// reference clock, and never mutates the record.
pub struct Evaluator<'a> {
    catalog: &'a FieldCatalog,
}

impl<'a> Evaluator<'a> {
    /// Creates a new evaluator backed by the given catalog.
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    /// Validates `record` for `scope` as of the local current date.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownField` if the scope names a field
    /// absent from the catalog. Validation failures are not errors;
    /// they are entries in the returned report.
    pub fn evaluate(&self, record: &Record, scope: &Scope) -> EngineResult<ValidationReport> {
        self.evaluate_at(record, scope, Local::now().date_naive())
    }

    /// Validates `record` for `scope` against a fixed reference clock.
    ///
    /// Age and date-window rules are relative to `as_of`, so hosts and
    /// tests can pin the clock for reproducible results.
    pub fn evaluate_at(
        &self,
        record: &Record,
        scope: &Scope,
        as_of: NaiveDate,
    ) -> EngineResult<ValidationReport> {
        if let Scope::Fields(names) = scope {
            for name in names {
                if !self.catalog.contains(name) {
                    return Err(EngineError::unknown_field(name));
                }
            }
        }

        let snapshot = Snapshot::new(record, as_of);
        let mut report = ValidationReport::new();

        for rule in rule_set() {
            if !scope.covers_any(rule.targets) {
                continue;
            }
            // Submit-only rules never run for partial scopes.
            if rule.applies == Applicability::AtSubmit && !scope.is_all() {
                continue;
            }
            if !rule.applies.applies(&snapshot) {
                continue;
            }
            if !rule.check.holds(&snapshot) {
                for target in rule.targets {
                    report.add(*target, rule.message);
                }
            }
        }

        Ok(report)
    }
}
