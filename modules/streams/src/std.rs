//! Standard-library integrations.

/// `tracing`-backed dropped-error reporting.
mod tracing_dropped_error;

pub use tracing_dropped_error::install_tracing_dropped_error_hook;
