//! Observability for the storefront workloads.
//!
//! - `StructuredLogger` - Structured logging with request context
//! - `LogBuilder` - Fluent per-entry field builder

mod logging;

pub use logging::*;
