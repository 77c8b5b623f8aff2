//! Section Partitioner for intake
//!
//! The onboarding form presents its fields in five sequential sections.
//! This module is the static lookup table mapping each section to the
//! fields it is responsible for, used by hosts to build the scope of a
//! per-section "advance" validation call.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::fields;
use crate::engine::Scope;

/// Result type for section lookups
pub type SectionResult<T> = Result<T, SectionError>;

/// Errors raised by section lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    /// Section index outside `0..Section::COUNT`
    #[error("Invalid section index {0}, expected 0..{count}", count = Section::COUNT)]
    InvalidSection(usize),
}

/// The five sequential form sections, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    PersonalInfo,
    JobDetails,
    SkillsPreferences,
    EmergencyContact,
    Confirmation,
}

impl Section {
    /// Number of sections.
    pub const COUNT: usize = 5;

    /// All sections in presentation order.
    pub fn all() -> [Section; Self::COUNT] {
        [
            Section::PersonalInfo,
            Section::JobDetails,
            Section::SkillsPreferences,
            Section::EmergencyContact,
            Section::Confirmation,
        ]
    }

    /// Resolves a zero-based section index.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::InvalidSection` for out-of-range indices.
    pub fn from_index(index: usize) -> SectionResult<Section> {
        Self::all()
            .get(index)
            .copied()
            .ok_or(SectionError::InvalidSection(index))
    }

    /// Zero-based position in presentation order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Human-readable section title.
    pub fn title(&self) -> &'static str {
        match self {
            Section::PersonalInfo => "Personal Info",
            Section::JobDetails => "Job Details",
            Section::SkillsPreferences => "Skills & Preferences",
            Section::EmergencyContact => "Emergency Contact",
            Section::Confirmation => "Review & Submit",
        }
    }

    /// Fields editable in this section.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Section::PersonalInfo => &[
                fields::FULL_NAME,
                fields::EMAIL,
                fields::PHONE,
                fields::DOB,
            ],
            Section::JobDetails => &[
                fields::DEPARTMENT,
                fields::POSITION_TITLE,
                fields::START_DATE,
                fields::JOB_TYPE,
                fields::SALARY,
                fields::HOURLY_RATE,
                fields::MANAGER,
            ],
            Section::SkillsPreferences => &[
                fields::PRIMARY_SKILLS,
                fields::EXPERIENCE,
                fields::PREFERRED_HOURS_START,
                fields::PREFERRED_HOURS_END,
                fields::REMOTE_WORK_PREFERENCE,
                fields::MANAGER_APPROVED,
                fields::EXTRA_NOTES,
            ],
            Section::EmergencyContact => &[
                fields::CONTACT_NAME,
                fields::RELATIONSHIP,
                fields::CONTACT_PHONE,
                fields::GUARDIAN_NAME,
                fields::GUARDIAN_PHONE,
            ],
            Section::Confirmation => &[fields::CONFIRM],
        }
    }

    /// Builds the evaluation scope covering exactly this section.
    pub fn scope(&self) -> Scope {
        Scope::fields(self.fields().iter().copied())
    }
}

/// Static lookup: the field names of the section at `index`.
///
/// # Errors
///
/// Returns `SectionError::InvalidSection` for out-of-range indices.
pub fn fields_of(index: usize) -> SectionResult<&'static [&'static str]> {
    Ok(Section::from_index(index)?.fields())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_fields_of_valid_indices() {
        assert_eq!(fields_of(0).unwrap(), Section::PersonalInfo.fields());
        assert_eq!(fields_of(4).unwrap(), &[fields::CONFIRM]);
    }

    #[test]
    fn test_fields_of_out_of_range() {
        let err = fields_of(5).unwrap_err();
        assert_eq!(err, SectionError::InvalidSection(5));
        assert!(err.to_string().contains("0..5"));
    }

    #[test]
    fn test_sections_partition_is_disjoint() {
        let mut seen = BTreeSet::new();
        for section in Section::all() {
            for field in section.fields() {
                assert!(seen.insert(*field), "field {} in two sections", field);
            }
        }
    }

    #[test]
    fn test_index_round_trip() {
        for (i, section) in Section::all().into_iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i).unwrap(), section);
        }
    }
}
