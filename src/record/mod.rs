//! Record Model subsystem for intake
//!
//! The record is the one in-progress set of collected field values for
//! an onboarding session: created with defaults at session start,
//! mutated field-by-field by the host, discarded after submit.
//!
//! # Design Principles
//!
//! - Every key corresponds to a catalog entry; unknown keys are rejected
//! - Absent entry means undefined, distinct from an empty value
//! - Mutation flips a dirty flag the host consumes for unsaved-changes
//!   warnings; validation never mutates the record

mod errors;
mod model;
mod value;

pub use errors::{RecordError, RecordResult};
pub use model::Record;
pub use value::Value;
