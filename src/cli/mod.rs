//! CLI host for intake
//!
//! A thin front end that drives the engine the way the original form
//! host does: per-section "advance" checks and a full-record check at
//! submission, over a record supplied as a JSON file.
//!
//! Exit codes: 0 valid, 1 validation failures, 2 usage or I/O error.

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
