//! CLI argument definitions using clap
//!
//! Commands:
//! - intake validate --record <path> [--section <n>] [--as-of <date>]
//! - intake fields --section <n>
//! - intake describe <field>

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// intake - validation engine for a multi-section onboarding form
#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a record file, for one section or the whole record
    Validate {
        /// Path to the record JSON file
        #[arg(long)]
        record: PathBuf,

        /// Zero-based section index; omit to validate the entire
        /// record at submission scope
        #[arg(long)]
        section: Option<usize>,

        /// Reference date for age and start-date rules (YYYY-MM-DD);
        /// defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// List the fields of one section
    Fields {
        /// Zero-based section index
        #[arg(long)]
        section: usize,
    },

    /// Show the catalog descriptor of a field
    Describe {
        /// Field name, e.g. startDate
        field: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
