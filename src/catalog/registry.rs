//! Field catalog registry.
//!
//! One registry instance describes the whole onboarding form. It is
//! built in code (`FieldCatalog::onboarding`) rather than loaded from
//! disk: the field set is fixed at build time.

use std::collections::BTreeMap;

use super::errors::{CatalogError, CatalogResult};
use super::fields;
use super::types::{Constraints, FieldDescriptor, FieldKind};
use crate::record::Value;
use crate::sections::Section;

/// Registry of every declared field, indexed by name.
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    fields: BTreeMap<&'static str, FieldDescriptor>,
}

impl FieldCatalog {
    /// Builds the fixed catalog for the onboarding form.
    pub fn onboarding() -> Self {
        let mut catalog = Self {
            fields: BTreeMap::new(),
        };

        // Section 1: personal info
        catalog.register(
            FieldDescriptor::new(
                fields::FULL_NAME,
                FieldKind::Text,
                Section::PersonalInfo,
                Constraints::min_len(1),
            )
            .with_default(Value::text("")),
        );
        catalog.register(
            FieldDescriptor::new(
                fields::EMAIL,
                FieldKind::Email,
                Section::PersonalInfo,
                Constraints::min_len(1),
            )
            .with_default(Value::text("")),
        );
        catalog.register(
            FieldDescriptor::new(
                fields::PHONE,
                FieldKind::Phone,
                Section::PersonalInfo,
                Constraints::none(),
            )
            .with_default(Value::text("")),
        );
        catalog.register(FieldDescriptor::new(
            fields::DOB,
            FieldKind::Date,
            Section::PersonalInfo,
            Constraints::none(),
        ));

        // Section 2: job details
        catalog.register(FieldDescriptor::new(
            fields::DEPARTMENT,
            FieldKind::Enum,
            Section::JobDetails,
            Constraints::one_of(fields::DEPARTMENTS),
        ));
        catalog.register(
            FieldDescriptor::new(
                fields::POSITION_TITLE,
                FieldKind::Text,
                Section::JobDetails,
                Constraints::min_len(3),
            )
            .with_default(Value::text("")),
        );
        catalog.register(FieldDescriptor::new(
            fields::START_DATE,
            FieldKind::Date,
            Section::JobDetails,
            Constraints::none(),
        ));
        catalog.register(FieldDescriptor::new(
            fields::JOB_TYPE,
            FieldKind::Enum,
            Section::JobDetails,
            Constraints::one_of(fields::JOB_TYPES),
        ));
        catalog.register(FieldDescriptor::new(
            fields::SALARY,
            FieldKind::Number,
            Section::JobDetails,
            Constraints::range(30_000.0, 200_000.0),
        ));
        catalog.register(FieldDescriptor::new(
            fields::HOURLY_RATE,
            FieldKind::Number,
            Section::JobDetails,
            Constraints::range(50.0, 150.0),
        ));
        catalog.register(
            FieldDescriptor::new(
                fields::MANAGER,
                FieldKind::Text,
                Section::JobDetails,
                Constraints::none(),
            )
            .with_default(Value::text("")),
        );

        // Section 3: skills & preferences
        catalog.register(
            FieldDescriptor::new(
                fields::PRIMARY_SKILLS,
                FieldKind::MultiSelect,
                Section::SkillsPreferences,
                Constraints::min_items(3),
            )
            .with_default(Value::empty_set()),
        );
        catalog.register(
            FieldDescriptor::new(
                fields::EXPERIENCE,
                FieldKind::NumberMap,
                Section::SkillsPreferences,
                Constraints::none(),
            )
            .with_default(Value::empty_map()),
        );
        catalog.register(
            FieldDescriptor::new(
                fields::PREFERRED_HOURS_START,
                FieldKind::TimeOfDay,
                Section::SkillsPreferences,
                Constraints::min_len(1),
            )
            .with_default(Value::text("")),
        );
        catalog.register(
            FieldDescriptor::new(
                fields::PREFERRED_HOURS_END,
                FieldKind::TimeOfDay,
                Section::SkillsPreferences,
                Constraints::min_len(1),
            )
            .with_default(Value::text("")),
        );
        catalog.register(
            FieldDescriptor::new(
                fields::REMOTE_WORK_PREFERENCE,
                FieldKind::Number,
                Section::SkillsPreferences,
                Constraints::range(0.0, 100.0),
            )
            .with_default(Value::Number(0.0)),
        );
        catalog.register(
            FieldDescriptor::new(
                fields::MANAGER_APPROVED,
                FieldKind::Bool,
                Section::SkillsPreferences,
                Constraints::none(),
            )
            .with_default(Value::Bool(false)),
        );
        catalog.register(
            FieldDescriptor::new(
                fields::EXTRA_NOTES,
                FieldKind::Text,
                Section::SkillsPreferences,
                Constraints::max_len(500),
            )
            .with_default(Value::text("")),
        );

        // Section 4: emergency contact
        catalog.register(
            FieldDescriptor::new(
                fields::CONTACT_NAME,
                FieldKind::Text,
                Section::EmergencyContact,
                Constraints::min_len(1),
            )
            .with_default(Value::text("")),
        );
        catalog.register(FieldDescriptor::new(
            fields::RELATIONSHIP,
            FieldKind::Enum,
            Section::EmergencyContact,
            Constraints::one_of(fields::RELATIONSHIPS),
        ));
        catalog.register(
            FieldDescriptor::new(
                fields::CONTACT_PHONE,
                FieldKind::Phone,
                Section::EmergencyContact,
                Constraints::pattern(crate::rules::INTERNATIONAL_PHONE_PATTERN),
            )
            .with_default(Value::text("")),
        );
        catalog.register(
            FieldDescriptor::new(
                fields::GUARDIAN_NAME,
                FieldKind::Text,
                Section::EmergencyContact,
                Constraints::none(),
            )
            .with_default(Value::text("")),
        );
        catalog.register(
            FieldDescriptor::new(
                fields::GUARDIAN_PHONE,
                FieldKind::Phone,
                Section::EmergencyContact,
                Constraints::pattern(crate::rules::INTERNATIONAL_PHONE_PATTERN),
            )
            .with_default(Value::text("")),
        );

        // Section 5: confirmation
        catalog.register(
            FieldDescriptor::new(
                fields::CONFIRM,
                FieldKind::Bool,
                Section::Confirmation,
                Constraints::none(),
            )
            .with_default(Value::Bool(false)),
        );

        catalog
    }

    fn register(&mut self, descriptor: FieldDescriptor) {
        self.fields.insert(descriptor.name, descriptor);
    }

    /// Looks up the descriptor for a field.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownField` if the name is not registered.
    pub fn describe(&self, field: &str) -> CatalogResult<&FieldDescriptor> {
        self.fields
            .get(field)
            .ok_or_else(|| CatalogError::unknown_field(field))
    }

    /// Returns whether a field name is registered.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterates all registered field names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// Iterates all descriptors in lexical field-name order.
    pub fn descriptors(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Returns the names of every field belonging to `section`.
    pub fn fields_in(&self, section: Section) -> Vec<&'static str> {
        self.fields
            .values()
            .filter(|d| d.section == section)
            .map(|d| d.name)
            .collect()
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
