//! Rule applicability conditions.
//!
//! A condition decides whether a rule applies to the current snapshot.
//! Conditions over absent fields evaluate false: a salary rule cannot
//! apply before a job type is chosen, and a guardian rule cannot apply
//! before a date of birth exists.

use crate::catalog::fields;

use super::snapshot::Snapshot;

/// When a rule applies, interpreted against the live snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Applicability {
    /// Unconditional
    Always,
    /// Job type equals the given option
    JobTypeIs(&'static str),
    /// Department is one of the given options
    DepartmentIn(&'static [&'static str]),
    /// Remote work preference strictly above the given percentage
    RemoteShareAbove(f64),
    /// Derived age strictly below the given number of years
    AgeBelow(i32),
    /// Only at final-submit scope; the evaluator gates this on the
    /// scope before the condition is consulted
    AtSubmit,
}

impl Applicability {
    /// Evaluates the condition against the snapshot.
    pub fn applies(&self, snapshot: &Snapshot<'_>) -> bool {
        match self {
            Applicability::Always | Applicability::AtSubmit => true,
            Applicability::JobTypeIs(job_type) => {
                snapshot.text(fields::JOB_TYPE) == Some(*job_type)
            }
            Applicability::DepartmentIn(departments) => snapshot
                .text(fields::DEPARTMENT)
                .is_some_and(|d| departments.iter().any(|dept| *dept == d)),
            Applicability::RemoteShareAbove(threshold) => snapshot
                .number(fields::REMOTE_WORK_PREFERENCE)
                .is_some_and(|share| share > *threshold),
            Applicability::AgeBelow(years) => {
                snapshot.age().is_some_and(|age| age < *years)
            }
        }
    }
}
