//! JSON output handling for the CLI.
//!
//! - Output: single JSON object per invocation via stdout
//! - Errors: JSON envelope via stderr

use std::io::{self, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Write a success response to stdout.
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    Ok(())
}

/// Write an error envelope to stderr.
pub fn write_error(err: &CliError) {
    let envelope = serde_json::json!({
        "status": "error",
        "error": {
            "code": err.code(),
            "message": err.to_string()
        }
    });

    let mut stderr = io::stderr();
    let _ = serde_json::to_writer(&mut stderr, &envelope);
    let _ = writeln!(stderr);
}
