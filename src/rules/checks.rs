//! Constraint checks.
//!
//! A check decides whether an applicable rule's constraint holds on
//! the snapshot. Checks return plain booleans; the message attached to
//! a failure belongs to the rule, not the check.
//!
//! Required-ness is encoded per check: a check over an absent field
//! fails when the constraint implies presence (`NonEmpty`, ranges,
//! patterns) and passes when it only bounds an optional value
//! (`MaxLen`, weekday restrictions layered on the window check).

use std::sync::OnceLock;

use chrono::{Days, Weekday};
use regex::Regex;

use crate::derived::age_in_years;

use super::snapshot::Snapshot;

/// Pattern for international phone numbers: `+<1-3 digits>-<3>-<3>-<4>`.
pub const INTERNATIONAL_PHONE_PATTERN: &str = r"^\+\d{1,3}-\d{3}-\d{3}-\d{4}$";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static INTERNATIONAL_PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn international_phone_re() -> &'static Regex {
    INTERNATIONAL_PHONE_RE
        .get_or_init(|| Regex::new(INTERNATIONAL_PHONE_PATTERN).expect("phone pattern compiles"))
}

/// The constraint a rule enforces when applicable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    /// Text present and non-empty
    NonEmpty(&'static str),
    /// Text has at least `n` whitespace-separated tokens
    MinTokens(&'static str, usize),
    /// Text is a syntactically valid email address
    EmailSyntax(&'static str),
    /// Text contains at least `n` decimal digits
    MinDigits(&'static str, usize),
    /// Date yields an age of at least `n` years as of the snapshot clock
    AgeAtLeast(&'static str, i32),
    /// Text is one of the given options
    OneOf(&'static str, &'static [&'static str]),
    /// Text present with at least `n` characters
    MinLen(&'static str, usize),
    /// Text, when present, has at most `n` characters
    MaxLen(&'static str, usize),
    /// Date present, not before the snapshot clock, and at most
    /// `max_days_ahead` days after it
    DateWindow {
        field: &'static str,
        max_days_ahead: u64,
    },
    /// Date, when present, does not fall on any of the given weekdays
    NotOnWeekdays(&'static str, &'static [Weekday]),
    /// Number present and within `[min, max]`
    NumberInRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    /// Number present, integral, and within `[min, max]`
    IntegerInRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    /// Selection set has at least `n` items
    MinItems(&'static str, usize),
    /// Every selected skill has a recorded experience value > 0
    ExperienceCovers {
        skills: &'static str,
        experience: &'static str,
    },
    /// Boolean present and true
    MustBeTrue(&'static str),
    /// Text matches the international phone pattern
    InternationalPhone(&'static str),
}

impl Check {
    /// Evaluates the constraint against the snapshot.
    pub fn holds(&self, snapshot: &Snapshot<'_>) -> bool {
        match *self {
            Check::NonEmpty(field) => snapshot.text(field).is_some_and(|s| !s.is_empty()),
            Check::MinTokens(field, n) => snapshot
                .text(field)
                .is_some_and(|s| s.split_whitespace().count() >= n),
            Check::EmailSyntax(field) => {
                snapshot.text(field).is_some_and(|s| email_re().is_match(s))
            }
            Check::MinDigits(field, n) => snapshot
                .text(field)
                .is_some_and(|s| s.chars().filter(char::is_ascii_digit).count() >= n),
            Check::AgeAtLeast(field, years) => snapshot
                .date(field)
                .is_some_and(|dob| age_in_years(dob, snapshot.as_of()) >= years),
            Check::OneOf(field, options) => snapshot
                .text(field)
                .is_some_and(|s| options.iter().any(|option| *option == s)),
            Check::MinLen(field, n) => {
                snapshot.text(field).is_some_and(|s| s.chars().count() >= n)
            }
            Check::MaxLen(field, n) => snapshot
                .text(field)
                .map_or(true, |s| s.chars().count() <= n),
            Check::DateWindow {
                field,
                max_days_ahead,
            } => snapshot.date(field).is_some_and(|date| {
                let latest = snapshot.as_of().checked_add_days(Days::new(max_days_ahead));
                date >= snapshot.as_of() && latest.is_some_and(|l| date <= l)
            }),
            Check::NotOnWeekdays(field, weekdays) => snapshot
                .date(field)
                .map_or(true, |date| !weekdays.contains(&chrono::Datelike::weekday(&date))),
            Check::NumberInRange { field, min, max } => snapshot
                .number(field)
                .is_some_and(|n| n >= min && n <= max),
            Check::IntegerInRange { field, min, max } => snapshot
                .number(field)
                .is_some_and(|n| n.fract() == 0.0 && n >= min && n <= max),
            Check::MinItems(field, n) => {
                snapshot.text_set(field).is_some_and(|set| set.len() >= n)
            }
            Check::ExperienceCovers { skills, experience } => {
                let selected = match snapshot.text_set(skills) {
                    Some(set) => set,
                    None => return true,
                };
                selected.iter().all(|skill| {
                    snapshot
                        .number_map(experience)
                        .and_then(|map| map.get(skill))
                        .is_some_and(|years| *years > 0.0)
                })
            }
            Check::MustBeTrue(field) => snapshot.boolean(field) == Some(true),
            Check::InternationalPhone(field) => snapshot
                .text(field)
                .is_some_and(|s| international_phone_re().is_match(s)),
        }
    }
}
