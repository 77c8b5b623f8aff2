//! Rule Invariant Tests
//!
//! End-to-end checks of the rule set through the evaluator:
//! - A fully satisfied record yields an empty report
//! - Evaluation is deterministic and idempotent
//! - Conditional rules follow the live snapshot, never stale state
//! - Exact thresholds: age 18, salary range, 90-day window, remote 50%

use chrono::NaiveDate;
use intake::catalog::{fields, FieldCatalog};
use intake::engine::{Evaluator, Scope};
use intake::record::{Record, Value};

// =============================================================================
// Helper Functions
// =============================================================================

/// Reference clock for every test: Thursday 2026-08-27.
fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A record satisfying every rule as of the reference clock.
fn valid_record(catalog: &FieldCatalog) -> Record {
    let mut r = Record::with_defaults(catalog);
    let mut set = |field: &str, value: Value| r.set(catalog, field, value).unwrap();

    set(fields::FULL_NAME, Value::text("Ada Lovelace"));
    set(fields::EMAIL, Value::text("ada@example.com"));
    set(fields::PHONE, Value::text("555-123-4567"));
    set(fields::DOB, Value::Date(ymd(1990, 6, 15)));

    set(fields::DEPARTMENT, Value::text("Engineering"));
    set(fields::POSITION_TITLE, Value::text("Staff Engineer"));
    set(fields::START_DATE, Value::Date(ymd(2026, 9, 7))); // a Monday
    set(fields::JOB_TYPE, Value::text("Full-time"));
    set(fields::SALARY, Value::Number(90_000.0));

    set(
        fields::PRIMARY_SKILLS,
        Value::set_of(["SQL", "Python", "Go"]),
    );
    set(
        fields::EXPERIENCE,
        Value::map_of([("SQL", 4.0), ("Python", 2.0), ("Go", 1.0)]),
    );
    set(fields::PREFERRED_HOURS_START, Value::text("09:00"));
    set(fields::PREFERRED_HOURS_END, Value::text("17:00"));
    set(fields::REMOTE_WORK_PREFERENCE, Value::Number(40.0));

    set(fields::CONTACT_NAME, Value::text("Grace Hopper"));
    set(fields::RELATIONSHIP, Value::text("Friend"));
    set(fields::CONTACT_PHONE, Value::text("+1-123-456-7890"));

    set(fields::CONFIRM, Value::Bool(true));
    r
}

// =============================================================================
// Whole-record Validity and Determinism
// =============================================================================

/// A record satisfying every rule produces an empty report at full scope.
#[test]
fn test_satisfied_record_yields_empty_report() {
    let catalog = FieldCatalog::onboarding();
    let evaluator = Evaluator::new(&catalog);
    let record = valid_record(&catalog);

    let report = evaluator.evaluate_at(&record, &Scope::All, as_of()).unwrap();
    assert!(report.is_valid(), "unexpected failures: {:?}", report);
}

/// Same record, same scope, same clock: identical results every time.
#[test]
fn test_evaluation_is_deterministic() {
    let catalog = FieldCatalog::onboarding();
    let evaluator = Evaluator::new(&catalog);
    let mut record = valid_record(&catalog);
    record.clear(&catalog, fields::EMAIL).unwrap();
    record.set(&catalog, fields::SALARY, 10.0).unwrap();

    let first = evaluator.evaluate_at(&record, &Scope::All, as_of()).unwrap();
    for _ in 0..100 {
        let again = evaluator.evaluate_at(&record, &Scope::All, as_of()).unwrap();
        assert_eq!(again, first);
    }
}

// =============================================================================
// Age Boundary
// =============================================================================

/// Born exactly 18 years before the clock: valid. One day later: not.
#[test]
fn test_age_eighteen_boundary() {
    let catalog = FieldCatalog::onboarding();
    let evaluator = Evaluator::new(&catalog);
    let scope = Scope::fields([fields::DOB]);

    let mut record = Record::with_defaults(&catalog);
    record
        .set(&catalog, fields::DOB, ymd(2008, 8, 27))
        .unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(report.messages_for(fields::DOB).is_empty());

    // 17 years and 364 days old.
    record
        .set(&catalog, fields::DOB, ymd(2008, 8, 28))
        .unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert_eq!(
        report.messages_for(fields::DOB),
        &["You must be at least 18 years old"]
    );
}

// =============================================================================
// Conditional Salary and Hourly Rate
// =============================================================================

/// Salary bounds apply only while the job type is Full-time.
#[test]
fn test_conditional_salary() {
    let catalog = FieldCatalog::onboarding();
    let evaluator = Evaluator::new(&catalog);
    let scope = Scope::fields([fields::SALARY]);

    let mut record = Record::with_defaults(&catalog);
    record.set(&catalog, fields::JOB_TYPE, "Full-time").unwrap();
    record.set(&catalog, fields::SALARY, 25_000.0).unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert_eq!(
        report.messages_for(fields::SALARY),
        &["Annual salary must be between $30,000 and $200,000"]
    );

    record.set(&catalog, fields::SALARY, 30_000.0).unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(report.messages_for(fields::SALARY).is_empty());

    // Switching to Contract makes the salary rule inapplicable,
    // whatever value is still sitting in the field.
    record.set(&catalog, fields::SALARY, 25_000.0).unwrap();
    record.set(&catalog, fields::JOB_TYPE, "Contract").unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(report.messages_for(fields::SALARY).is_empty());
}

/// Hourly rate bounds apply only to Contract job types.
#[test]
fn test_conditional_hourly_rate() {
    let catalog = FieldCatalog::onboarding();
    let evaluator = Evaluator::new(&catalog);
    let scope = Scope::fields([fields::HOURLY_RATE]);

    let mut record = Record::with_defaults(&catalog);
    record.set(&catalog, fields::JOB_TYPE, "Contract").unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert_eq!(
        report.messages_for(fields::HOURLY_RATE),
        &["Hourly rate must be between $50 and $150"]
    );

    record.set(&catalog, fields::HOURLY_RATE, 75.0).unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(report.messages_for(fields::HOURLY_RATE).is_empty());

    record.set(&catalog, fields::JOB_TYPE, "Part-time").unwrap();
    record.set(&catalog, fields::HOURLY_RATE, 999.0).unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(report.messages_for(fields::HOURLY_RATE).is_empty());
}

// =============================================================================
// Weekend Start-date Rule
// =============================================================================

/// HR may not start on a Friday; Engineering may.
#[test]
fn test_weekend_start_date_depends_on_department() {
    let catalog = FieldCatalog::onboarding();
    let evaluator = Evaluator::new(&catalog);
    let scope = Scope::fields([fields::START_DATE]);
    let friday = ymd(2026, 9, 4);

    let mut record = Record::with_defaults(&catalog);
    record.set(&catalog, fields::DEPARTMENT, "HR").unwrap();
    record.set(&catalog, fields::START_DATE, friday).unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert_eq!(
        report.messages_for(fields::START_DATE),
        &["Start date cannot be on a Friday or Saturday for HR/Finance"]
    );

    record
        .set(&catalog, fields::DEPARTMENT, "Engineering")
        .unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(report.messages_for(fields::START_DATE).is_empty());
}

/// The 90-day window and the weekend rule stack their messages.
#[test]
fn test_start_date_window_and_weekend_both_reported() {
    let catalog = FieldCatalog::onboarding();
    let evaluator = Evaluator::new(&catalog);
    let scope = Scope::fields([fields::START_DATE]);

    // A Friday beyond the 90-day window.
    let far_friday = ymd(2027, 1, 1);
    let mut record = Record::with_defaults(&catalog);
    record.set(&catalog, fields::DEPARTMENT, "Finance").unwrap();
    record.set(&catalog, fields::START_DATE, far_friday).unwrap();

    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert_eq!(
        report.messages_for(fields::START_DATE),
        &[
            "Start Date must be today or within the next 90 days",
            "Start date cannot be on a Friday or Saturday for HR/Finance",
        ]
    );
}

// =============================================================================
// Guardian Requirement
// =============================================================================

/// Under 21 the guardian fields are required; at exactly 21 they are not.
#[test]
fn test_guardian_requirement_tracks_age() {
    let catalog = FieldCatalog::onboarding();
    let evaluator = Evaluator::new(&catalog);
    let scope = Scope::fields([fields::GUARDIAN_NAME, fields::GUARDIAN_PHONE]);

    // Age 20 as of the reference clock.
    let mut record = Record::with_defaults(&catalog);
    record.set(&catalog, fields::DOB, ymd(2006, 6, 15)).unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert_eq!(
        report.messages_for(fields::GUARDIAN_NAME),
        &["Guardian name is required for employees under 21."]
    );
    assert_eq!(
        report.messages_for(fields::GUARDIAN_PHONE),
        &["A valid guardian phone number is required."]
    );

    // Filling the guardian block satisfies both rules.
    record
        .set(&catalog, fields::GUARDIAN_NAME, "Augusta Byron")
        .unwrap();
    record
        .set(&catalog, fields::GUARDIAN_PHONE, "+44-123-456-7890")
        .unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(report.is_valid());

    // Exactly 21: the rules no longer apply.
    let mut record = Record::with_defaults(&catalog);
    record.set(&catalog, fields::DOB, ymd(2005, 8, 27)).unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(report.is_valid());
}

// =============================================================================
// Experience Completeness
// =============================================================================

/// Every selected skill needs a positive experience entry; the failure
/// attaches to the aggregate experience field.
#[test]
fn test_experience_completeness() {
    let catalog = FieldCatalog::onboarding();
    let evaluator = Evaluator::new(&catalog);
    let scope = Scope::fields([fields::EXPERIENCE]);

    let mut record = Record::with_defaults(&catalog);
    record
        .set(
            &catalog,
            fields::PRIMARY_SKILLS,
            Value::set_of(["SQL", "Python", "Go"]),
        )
        .unwrap();

    // Missing "Go" entirely.
    record
        .set(
            &catalog,
            fields::EXPERIENCE,
            Value::map_of([("SQL", 4.0), ("Python", 2.0)]),
        )
        .unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert_eq!(
        report.messages_for(fields::EXPERIENCE),
        &["Please provide years of experience for all selected skills."]
    );

    // "Go" present but zero.
    record
        .set(
            &catalog,
            fields::EXPERIENCE,
            Value::map_of([("SQL", 4.0), ("Python", 2.0), ("Go", 0.0)]),
        )
        .unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(!report.is_valid());

    // All three positive.
    record
        .set(
            &catalog,
            fields::EXPERIENCE,
            Value::map_of([("SQL", 4.0), ("Python", 2.0), ("Go", 1.0)]),
        )
        .unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(report.is_valid());
}

// =============================================================================
// Manager-approval Trigger
// =============================================================================

/// Above 50% remote the approval flag must be true; at 50% it is moot.
#[test]
fn test_manager_approval_trigger() {
    let catalog = FieldCatalog::onboarding();
    let evaluator = Evaluator::new(&catalog);
    let scope = Scope::fields([fields::MANAGER_APPROVED]);

    let mut record = Record::with_defaults(&catalog);
    record
        .set(&catalog, fields::REMOTE_WORK_PREFERENCE, 51.0)
        .unwrap();
    record.clear(&catalog, fields::MANAGER_APPROVED).unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert_eq!(
        report.messages_for(fields::MANAGER_APPROVED),
        &["Manager approval is required for over 50% remote work."]
    );

    record
        .set(&catalog, fields::REMOTE_WORK_PREFERENCE, 50.0)
        .unwrap();
    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(report.is_valid());
}

// =============================================================================
// Clock Sensitivity
// =============================================================================

/// The same record flips validity when the reference clock moves past
/// the start-date window.
#[test]
fn test_start_window_is_relative_to_the_clock() {
    let catalog = FieldCatalog::onboarding();
    let evaluator = Evaluator::new(&catalog);
    let scope = Scope::fields([fields::START_DATE]);

    let mut record = Record::with_defaults(&catalog);
    record
        .set(&catalog, fields::START_DATE, ymd(2026, 9, 7))
        .unwrap();

    let report = evaluator.evaluate_at(&record, &scope, as_of()).unwrap();
    assert!(report.is_valid());

    // Evaluated two weeks later the date is in the past.
    let later = ymd(2026, 9, 21);
    let report = evaluator.evaluate_at(&record, &scope, later).unwrap();
    assert!(!report.is_valid());
}
