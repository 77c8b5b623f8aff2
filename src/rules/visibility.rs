//! Shared visibility predicates.
//!
//! Conditional fields (salary vs hourly rate, the manager-approval
//! checkbox, the guardian block) are shown or hidden by the same
//! conditions the validator applies. Hosts call these predicates so
//! the UI and the rule set never diverge on what counts as applicable.

use crate::catalog::fields;

use super::conditions::Applicability;
use super::snapshot::Snapshot;

/// Whether the salary field applies (job type is Full-time).
pub fn salary_applicable(snapshot: &Snapshot<'_>) -> bool {
    Applicability::JobTypeIs(fields::FULL_TIME).applies(snapshot)
}

/// Whether the hourly rate field applies (job type is Contract).
pub fn hourly_rate_applicable(snapshot: &Snapshot<'_>) -> bool {
    Applicability::JobTypeIs(fields::CONTRACT).applies(snapshot)
}

/// Whether manager approval is required (remote share above 50%).
pub fn manager_approval_required(snapshot: &Snapshot<'_>) -> bool {
    Applicability::RemoteShareAbove(50.0).applies(snapshot)
}

/// Whether the guardian block applies (derived age below 21).
pub fn guardian_required(snapshot: &Snapshot<'_>) -> bool {
    Applicability::AgeBelow(21).applies(snapshot)
}

/// Whether the chosen department restricts weekend start dates.
pub fn weekend_restricted(snapshot: &Snapshot<'_>) -> bool {
    Applicability::DepartmentIn(fields::WEEKEND_RESTRICTED_DEPARTMENTS).applies(snapshot)
}
