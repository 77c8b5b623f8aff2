//! The fixed rule catalog for the onboarding form.
//!
//! One table, fixed at build time. Rules attached to the same field
//! are independent; the evaluator collects every failing message
//! rather than stopping at the first.

use chrono::Weekday;

use crate::catalog::fields;

use super::checks::Check;
use super::conditions::Applicability;
use super::rule::{Rule, RuleKind};

/// The complete rule set, in catalog order.
pub fn rule_set() -> &'static [Rule] {
    RULES
}

static RULES: &[Rule] = &[
    // Personal info
    Rule {
        id: "full_name_required",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::NonEmpty(fields::FULL_NAME),
        targets: &[fields::FULL_NAME],
        message: "Full Name is required",
    },
    Rule {
        id: "full_name_two_words",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::MinTokens(fields::FULL_NAME, 2),
        targets: &[fields::FULL_NAME],
        message: "Please enter at least two words",
    },
    Rule {
        id: "email_required",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::NonEmpty(fields::EMAIL),
        targets: &[fields::EMAIL],
        message: "Email is required",
    },
    Rule {
        id: "email_syntax",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::EmailSyntax(fields::EMAIL),
        targets: &[fields::EMAIL],
        message: "Invalid email address",
    },
    Rule {
        id: "phone_min_digits",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::MinDigits(fields::PHONE, 10),
        targets: &[fields::PHONE],
        message: "Phone number must be at least 10 digits",
    },
    Rule {
        id: "dob_adult",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::AgeAtLeast(fields::DOB, 18),
        targets: &[fields::DOB],
        message: "You must be at least 18 years old",
    },
    // Job details
    Rule {
        id: "department_known",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::OneOf(fields::DEPARTMENT, fields::DEPARTMENTS),
        targets: &[fields::DEPARTMENT],
        message: "Please select a valid department",
    },
    Rule {
        id: "position_title_length",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::MinLen(fields::POSITION_TITLE, 3),
        targets: &[fields::POSITION_TITLE],
        message: "Position must be at least 3 characters",
    },
    Rule {
        id: "start_date_window",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::DateWindow {
            field: fields::START_DATE,
            max_days_ahead: 90,
        },
        targets: &[fields::START_DATE],
        message: "Start Date must be today or within the next 90 days",
    },
    Rule {
        id: "start_date_weekend",
        kind: RuleKind::CrossField,
        applies: Applicability::DepartmentIn(fields::WEEKEND_RESTRICTED_DEPARTMENTS),
        check: Check::NotOnWeekdays(fields::START_DATE, &[Weekday::Fri, Weekday::Sat]),
        targets: &[fields::START_DATE],
        message: "Start date cannot be on a Friday or Saturday for HR/Finance",
    },
    Rule {
        id: "job_type_known",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::OneOf(fields::JOB_TYPE, fields::JOB_TYPES),
        targets: &[fields::JOB_TYPE],
        message: "Please select a valid job type",
    },
    Rule {
        id: "salary_range",
        kind: RuleKind::Conditional,
        applies: Applicability::JobTypeIs(fields::FULL_TIME),
        check: Check::NumberInRange {
            field: fields::SALARY,
            min: 30_000.0,
            max: 200_000.0,
        },
        targets: &[fields::SALARY],
        message: "Annual salary must be between $30,000 and $200,000",
    },
    Rule {
        id: "hourly_rate_range",
        kind: RuleKind::Conditional,
        applies: Applicability::JobTypeIs(fields::CONTRACT),
        check: Check::NumberInRange {
            field: fields::HOURLY_RATE,
            min: 50.0,
            max: 150.0,
        },
        targets: &[fields::HOURLY_RATE],
        message: "Hourly rate must be between $50 and $150",
    },
    // Skills & preferences
    Rule {
        id: "primary_skills_min",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::MinItems(fields::PRIMARY_SKILLS, 3),
        targets: &[fields::PRIMARY_SKILLS],
        message: "Please select at least 3 skills.",
    },
    Rule {
        id: "experience_complete",
        kind: RuleKind::CrossField,
        applies: Applicability::Always,
        check: Check::ExperienceCovers {
            skills: fields::PRIMARY_SKILLS,
            experience: fields::EXPERIENCE,
        },
        targets: &[fields::EXPERIENCE],
        message: "Please provide years of experience for all selected skills.",
    },
    Rule {
        id: "preferred_hours_start_required",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::NonEmpty(fields::PREFERRED_HOURS_START),
        targets: &[fields::PREFERRED_HOURS_START],
        message: "Start time is required.",
    },
    Rule {
        id: "preferred_hours_end_required",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::NonEmpty(fields::PREFERRED_HOURS_END),
        targets: &[fields::PREFERRED_HOURS_END],
        message: "End time is required.",
    },
    Rule {
        id: "remote_share_range",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::IntegerInRange {
            field: fields::REMOTE_WORK_PREFERENCE,
            min: 0.0,
            max: 100.0,
        },
        targets: &[fields::REMOTE_WORK_PREFERENCE],
        message: "Remote work preference must be a whole number between 0 and 100",
    },
    Rule {
        id: "manager_approval_for_remote",
        kind: RuleKind::Conditional,
        applies: Applicability::RemoteShareAbove(50.0),
        check: Check::MustBeTrue(fields::MANAGER_APPROVED),
        targets: &[fields::MANAGER_APPROVED],
        message: "Manager approval is required for over 50% remote work.",
    },
    Rule {
        id: "extra_notes_length",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::MaxLen(fields::EXTRA_NOTES, 500),
        targets: &[fields::EXTRA_NOTES],
        message: "Notes must be under 500 characters.",
    },
    // Emergency contact
    Rule {
        id: "contact_name_required",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::NonEmpty(fields::CONTACT_NAME),
        targets: &[fields::CONTACT_NAME],
        message: "Contact name is required.",
    },
    Rule {
        id: "relationship_known",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::OneOf(fields::RELATIONSHIP, fields::RELATIONSHIPS),
        targets: &[fields::RELATIONSHIP],
        message: "Please select a valid relationship",
    },
    Rule {
        id: "contact_phone_format",
        kind: RuleKind::Intrinsic,
        applies: Applicability::Always,
        check: Check::InternationalPhone(fields::CONTACT_PHONE),
        targets: &[fields::CONTACT_PHONE],
        message: "Phone number must be in the format +1-123-456-7890",
    },
    Rule {
        id: "guardian_name_for_minors",
        kind: RuleKind::Conditional,
        applies: Applicability::AgeBelow(21),
        check: Check::NonEmpty(fields::GUARDIAN_NAME),
        targets: &[fields::GUARDIAN_NAME],
        message: "Guardian name is required for employees under 21.",
    },
    Rule {
        id: "guardian_phone_for_minors",
        kind: RuleKind::Conditional,
        applies: Applicability::AgeBelow(21),
        check: Check::InternationalPhone(fields::GUARDIAN_PHONE),
        targets: &[fields::GUARDIAN_PHONE],
        message: "A valid guardian phone number is required.",
    },
    // Confirmation
    Rule {
        id: "confirm_at_submit",
        kind: RuleKind::Conditional,
        applies: Applicability::AtSubmit,
        check: Check::MustBeTrue(fields::CONFIRM),
        targets: &[fields::CONFIRM],
        message: "You must confirm the information is correct to submit.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_rule_ids_unique() {
        let mut ids = BTreeSet::new();
        for rule in rule_set() {
            assert!(ids.insert(rule.id), "duplicate rule id {}", rule.id);
        }
    }

    #[test]
    fn test_rule_targets_are_cataloged() {
        let catalog = crate::catalog::FieldCatalog::onboarding();
        for rule in rule_set() {
            for target in rule.targets {
                assert!(catalog.contains(target), "rule {} targets unknown field", rule.id);
            }
        }
    }

    #[test]
    fn test_conditional_rules_have_conditions() {
        for rule in rule_set() {
            match rule.kind {
                RuleKind::Intrinsic => {
                    assert_eq!(rule.applies, Applicability::Always, "rule {}", rule.id)
                }
                RuleKind::Conditional => {
                    assert_ne!(rule.applies, Applicability::Always, "rule {}", rule.id)
                }
                RuleKind::CrossField => {}
            }
        }
    }
}
