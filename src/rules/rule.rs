//! The rule record.

use super::checks::Check;
use super::conditions::Applicability;

/// How a rule relates fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Unconditional constraint on a single field
    Intrinsic,
    /// Constraint whose applicability depends on another field or a
    /// derived fact
    Conditional,
    /// Constraint relating the values of several fields
    CrossField,
}

/// One declarative validation rule: an applicability condition, a
/// constraint check, and the field(s) a failure attaches to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Stable identifier, unique across the rule set
    pub id: &'static str,
    /// How the rule relates fields
    pub kind: RuleKind,
    /// When the rule applies; inapplicable rules are skipped, not failed
    pub applies: Applicability,
    /// The constraint enforced when applicable
    pub check: Check,
    /// Field(s) the failure message attaches to
    pub targets: &'static [&'static str],
    /// Message reported on failure
    pub message: &'static str,
}
