//! Field descriptor types.
//!
//! A descriptor captures everything that is true of a field in
//! isolation: its semantic kind, section membership, intrinsic limits,
//! and session-start default. Anything relating two fields belongs in
//! the rule set.

use serde::Serialize;

use crate::record::Value;
use crate::sections::Section;

/// Semantic kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-form text
    Text,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Calendar date
    Date,
    /// Membership in a fixed option set
    Enum,
    /// Numeric value
    Number,
    /// Boolean flag
    Bool,
    /// Set of selected option strings
    MultiSelect,
    /// Mapping from option string to numeric value
    NumberMap,
    /// Time of day, as text
    TimeOfDay,
}

impl FieldKind {
    /// Returns the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Date => "date",
            FieldKind::Enum => "enum",
            FieldKind::Number => "number",
            FieldKind::Bool => "bool",
            FieldKind::MultiSelect => "multi_select",
            FieldKind::NumberMap => "number_map",
            FieldKind::TimeOfDay => "time_of_day",
        }
    }
}

/// Intrinsic, non-relational constraints on a single field
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Constraints {
    /// Minimum text length in characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,
    /// Maximum text length in characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
    /// Inclusive numeric minimum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive numeric maximum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Regex the text form must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<&'static str>,
    /// Allowed option set for enum membership
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<&'static [&'static str]>,
    /// Minimum number of selected items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
}

impl Constraints {
    /// No intrinsic constraints
    pub fn none() -> Self {
        Self::default()
    }

    /// Text length at least `n`
    pub fn min_len(n: usize) -> Self {
        Self {
            min_len: Some(n),
            ..Self::default()
        }
    }

    /// Text length at most `n`
    pub fn max_len(n: usize) -> Self {
        Self {
            max_len: Some(n),
            ..Self::default()
        }
    }

    /// Numeric value within `[min, max]`
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    /// Membership in a fixed option set
    pub fn one_of(options: &'static [&'static str]) -> Self {
        Self {
            one_of: Some(options),
            ..Self::default()
        }
    }

    /// At least `n` selected items
    pub fn min_items(n: usize) -> Self {
        Self {
            min_items: Some(n),
            ..Self::default()
        }
    }

    /// Text matching a regex pattern
    pub fn pattern(pattern: &'static str) -> Self {
        Self {
            pattern: Some(pattern),
            ..Self::default()
        }
    }
}

/// Immutable description of one field, defined once at startup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Canonical field name
    pub name: &'static str,
    /// Semantic kind
    pub kind: FieldKind,
    /// Section the field is editable in
    pub section: Section,
    /// Intrinsic constraints
    pub constraints: Constraints,
    /// Session-start default; `None` means the field starts absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldDescriptor {
    /// Create a descriptor with no default
    pub fn new(
        name: &'static str,
        kind: FieldKind,
        section: Section,
        constraints: Constraints,
    ) -> Self {
        Self {
            name,
            kind,
            section,
            constraints,
            default: None,
        }
    }

    /// Attach a session-start default
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}
