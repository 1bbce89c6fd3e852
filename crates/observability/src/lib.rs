//! Tracing, logging, metrics (shared setup).

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{init, init_with_filter};
