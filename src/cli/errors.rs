//! CLI-specific error types.

use thiserror::Error;

use crate::engine::EngineError;
use crate::record::RecordError;
use crate::sections::SectionError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Record file could not be read
    #[error("Cannot read record file '{path}': {source}")]
    RecordFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Record file is not valid JSON
    #[error("Record file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Record JSON does not match the catalog
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Section index out of range
    #[error(transparent)]
    Section(#[from] SectionError),

    /// Engine rejected the request
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Output I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Stable error code for the JSON error envelope
    pub fn code(&self) -> &'static str {
        match self {
            Self::RecordFile { .. } => "RECORD_FILE_ERROR",
            Self::Json(_) => "RECORD_JSON_ERROR",
            Self::Record(_) => "RECORD_DECODE_ERROR",
            Self::Section(_) => "INVALID_SECTION",
            Self::Engine(_) => "ENGINE_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}
