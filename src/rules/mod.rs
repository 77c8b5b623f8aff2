//! Rule Set subsystem for intake
//!
//! Validation is driven by a declarative table of independent rule
//! records, each pairing an applicability condition with a constraint
//! check and the field(s) its failure attaches to. One generic
//! evaluator interprets the table; no rule carries imperative logic.
//!
//! # Design Principles
//!
//! - Conditions are re-evaluated against the live snapshot on every
//!   call; condition results are never cached
//! - An inapplicable rule is skipped entirely, never failed
//! - All messages for a field are collected; no short-circuit
//! - UI visibility reuses the same conditions via `visibility`

mod checks;
mod conditions;
mod rule;
mod set;
mod snapshot;
pub mod visibility;

pub use checks::{Check, INTERNATIONAL_PHONE_PATTERN};
pub use conditions::Applicability;
pub use rule::{Rule, RuleKind};
pub use set::rule_set;
pub use snapshot::Snapshot;
