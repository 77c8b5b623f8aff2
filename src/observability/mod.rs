//! Observability for intake hosts
//!
//! Structured, synchronous, deterministic logging for the code that
//! drives the engine. The engine itself never logs: validation
//! failures are ordinary results, rendered by the host.

mod logger;

pub use logger::{Logger, Severity};
