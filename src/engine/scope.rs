//! Evaluation scope.

use std::collections::BTreeSet;

/// The subset of fields one validation call is responsible for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// A specific set of field names (per-section "advance" checks)
    Fields(BTreeSet<String>),
    /// The entire record (final submission)
    All,
}

impl Scope {
    /// Scope over the given field names.
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Scope::Fields(names.into_iter().map(Into::into).collect())
    }

    /// Whether this is the full-record submission scope.
    pub fn is_all(&self) -> bool {
        matches!(self, Scope::All)
    }

    /// Whether any of `targets` is covered by this scope.
    pub fn covers_any(&self, targets: &[&str]) -> bool {
        match self {
            Scope::All => true,
            Scope::Fields(names) => targets.iter().any(|t| names.contains(*t)),
        }
    }
}
