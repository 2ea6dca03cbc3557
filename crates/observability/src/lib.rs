//! Logging setup shared by the binaries.

/// Subscriber configuration (filter, format).
pub mod tracing;

pub use self::tracing::{LogFormat, init};
