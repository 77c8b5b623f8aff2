//! intake - a deterministic validation engine for a multi-section
//! onboarding form
//!
//! The engine owns the field catalog, the declarative rule set, and
//! the evaluator that runs applicable rules against one in-memory
//! record, scoped to a single section or to the whole record at
//! submission. Rendering, navigation, and persistence are host
//! concerns.

pub mod catalog;
pub mod cli;
pub mod derived;
pub mod engine;
pub mod observability;
pub mod record;
pub mod rules;
pub mod sections;
