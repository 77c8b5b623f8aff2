//! Validation Evaluator subsystem for intake
//!
//! The evaluator runs the rule set against one record snapshot for a
//! requested scope and produces a structured report.
//!
//! # Design Principles
//!
//! - Pure: never mutates the record, no I/O, idempotent per snapshot
//! - A report covers only the fields actually checked in that call;
//!   absence of a field says nothing about fields outside the scope
//! - Validation failures are results, never errors; the only error is
//!   a scope naming an uncataloged field

mod errors;
mod evaluator;
mod report;
mod scope;

pub use errors::{EngineError, EngineResult};
pub use evaluator::Evaluator;
pub use report::ValidationReport;
pub use scope::Scope;
