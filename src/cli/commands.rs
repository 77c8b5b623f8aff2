//! CLI command implementations.
//!
//! Each command builds its inputs, calls the engine, and writes one
//! JSON response. All validation semantics live in the engine; the
//! commands only wire scope, clock, and record together.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::json;

use crate::catalog::FieldCatalog;
use crate::engine::{Evaluator, Scope, ValidationReport};
use crate::observability::{Logger, Severity};
use crate::record::Record;
use crate::sections::Section;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Parses arguments, dispatches, and returns the process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse_args();
    match dispatch(cli) {
        Ok(code) => code,
        Err(err) => {
            write_error(&err);
            2
        }
    }
}

fn dispatch(cli: Cli) -> CliResult<i32> {
    let catalog = FieldCatalog::onboarding();

    match cli.command {
        Command::Validate {
            record,
            section,
            as_of,
        } => cmd_validate(&catalog, &record, section, as_of),
        Command::Fields { section } => cmd_fields(section),
        Command::Describe { field } => cmd_describe(&catalog, &field),
    }
}

fn cmd_validate(
    catalog: &FieldCatalog,
    path: &Path,
    section: Option<usize>,
    as_of: Option<NaiveDate>,
) -> CliResult<i32> {
    let report = run_validate(catalog, path, section, as_of)?;

    let scope_label = match section {
        Some(index) => Section::from_index(index)?.title(),
        None => "all",
    };
    let error_count = report.message_count().to_string();
    Logger::log_stderr(
        Severity::Info,
        "VALIDATE_COMPLETE",
        &[("errors", error_count.as_str()), ("scope", scope_label)],
    );

    let valid = report.is_valid();
    write_response(json!({
        "valid": valid,
        "errors": &report,
    }))?;

    Ok(if valid { 0 } else { 1 })
}

/// Loads the record file and evaluates it for the requested scope.
fn run_validate(
    catalog: &FieldCatalog,
    path: &Path,
    section: Option<usize>,
    as_of: Option<NaiveDate>,
) -> CliResult<ValidationReport> {
    let record = load_record(catalog, path)?;
    let scope = match section {
        Some(index) => Section::from_index(index)?.scope(),
        None => Scope::All,
    };

    let evaluator = Evaluator::new(catalog);
    let report = match as_of {
        Some(date) => evaluator.evaluate_at(&record, &scope, date)?,
        None => evaluator.evaluate(&record, &scope)?,
    };
    Ok(report)
}

fn load_record(catalog: &FieldCatalog, path: &Path) -> CliResult<Record> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::RecordFile {
        path: path.display().to_string(),
        source,
    })?;
    let json: serde_json::Value = serde_json::from_str(&raw)?;
    Ok(Record::from_json(catalog, &json)?)
}

fn cmd_fields(index: usize) -> CliResult<i32> {
    let section = Section::from_index(index)?;
    write_response(json!({
        "section": index,
        "title": section.title(),
        "fields": section.fields(),
    }))?;
    Ok(0)
}

fn cmd_describe(catalog: &FieldCatalog, field: &str) -> CliResult<i32> {
    let descriptor = catalog
        .describe(field)
        .map_err(crate::record::RecordError::from)?;
    write_response(serde_json::to_value(descriptor)?)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn record_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn fixed_clock() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    #[test]
    fn test_validate_section_from_file() {
        let catalog = FieldCatalog::onboarding();
        let file = record_file(
            r#"{
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "555-123-4567",
                "dob": "1990-06-15"
            }"#,
        );

        let report =
            run_validate(&catalog, file.path(), Some(0), Some(fixed_clock())).unwrap();
        assert!(report.is_valid(), "unexpected errors: {:?}", report);
    }

    #[test]
    fn test_validate_full_record_reports_confirmation() {
        let catalog = FieldCatalog::onboarding();
        let file = record_file(r#"{"confirm": false}"#);

        let report = run_validate(&catalog, file.path(), None, Some(fixed_clock())).unwrap();
        assert_eq!(
            report.messages_for("confirm"),
            &["You must confirm the information is correct to submit."]
        );
    }

    #[test]
    fn test_validate_rejects_unknown_record_key() {
        let catalog = FieldCatalog::onboarding();
        let file = record_file(r#"{"nickname": "Ada"}"#);

        let err = run_validate(&catalog, file.path(), None, Some(fixed_clock())).unwrap_err();
        assert_eq!(err.code(), "RECORD_DECODE_ERROR");
    }

    #[test]
    fn test_validate_rejects_bad_section_index() {
        let catalog = FieldCatalog::onboarding();
        let file = record_file("{}");

        let err = run_validate(&catalog, file.path(), Some(9), Some(fixed_clock())).unwrap_err();
        assert_eq!(err.code(), "INVALID_SECTION");
    }

    #[test]
    fn test_validate_missing_file() {
        let catalog = FieldCatalog::onboarding();
        let err = run_validate(
            &catalog,
            Path::new("/nonexistent/record.json"),
            None,
            Some(fixed_clock()),
        )
        .unwrap_err();
        assert_eq!(err.code(), "RECORD_FILE_ERROR");
    }
}
