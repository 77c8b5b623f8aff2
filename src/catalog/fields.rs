//! Canonical field names and enumerated option sets.
//!
//! Field names use the same wire spelling the host exchanges in record
//! JSON, so constants here are the single source of truth for every
//! module that addresses a field.

// Personal info
pub const FULL_NAME: &str = "fullName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const DOB: &str = "dob";

// Job details
pub const DEPARTMENT: &str = "department";
pub const POSITION_TITLE: &str = "positionTitle";
pub const START_DATE: &str = "startDate";
pub const JOB_TYPE: &str = "jobType";
pub const SALARY: &str = "salary";
pub const HOURLY_RATE: &str = "hourlyRate";
pub const MANAGER: &str = "manager";

// Skills & preferences
pub const PRIMARY_SKILLS: &str = "primarySkills";
pub const EXPERIENCE: &str = "experience";
pub const PREFERRED_HOURS_START: &str = "preferredHoursStart";
pub const PREFERRED_HOURS_END: &str = "preferredHoursEnd";
pub const REMOTE_WORK_PREFERENCE: &str = "remoteWorkPreference";
pub const MANAGER_APPROVED: &str = "managerApproved";
pub const EXTRA_NOTES: &str = "extraNotes";

// Emergency contact
pub const CONTACT_NAME: &str = "contactName";
pub const RELATIONSHIP: &str = "relationship";
pub const CONTACT_PHONE: &str = "contactPhone";
pub const GUARDIAN_NAME: &str = "guardianName";
pub const GUARDIAN_PHONE: &str = "guardianPhone";

// Confirmation
pub const CONFIRM: &str = "confirm";

/// Departments accepted for `department`.
pub const DEPARTMENTS: &[&str] = &["Engineering", "Marketing", "Sales", "HR", "Finance"];

/// Job types accepted for `jobType`.
pub const JOB_TYPES: &[&str] = &["Full-time", "Part-time", "Contract"];

/// Relationships accepted for `relationship`.
pub const RELATIONSHIPS: &[&str] = &["Spouse", "Parent", "Sibling", "Friend", "Other"];

/// Departments whose start dates may not fall on Friday or Saturday.
pub const WEEKEND_RESTRICTED_DEPARTMENTS: &[&str] = &["HR", "Finance"];

pub const FULL_TIME: &str = "Full-time";
pub const CONTRACT: &str = "Contract";
