//! Field Catalog subsystem for intake
//!
//! The catalog declares every collectable field once, at startup:
//! its semantic kind, the section it belongs to, its intrinsic
//! (non-relational) constraints, and its session-start default.
//!
//! # Design Principles
//!
//! - Fixed at build time; no runtime mutation
//! - `describe` is the only lookup and fails loudly on unknown names
//! - Relational constraints live in the rule set, never here

mod errors;
pub mod fields;
mod registry;
mod types;

pub use errors::{CatalogError, CatalogResult};
pub use registry::FieldCatalog;
pub use types::{Constraints, FieldDescriptor, FieldKind};
