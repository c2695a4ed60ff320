//! `tracing`-backed receiver for failures nobody can be given through the
//! stream.

extern crate std;


use tracing::error;

use crate::core::{set_dropped_error_hook, DroppedErrorHook, StreamError};

/// Target name used in emitted events.
pub const TRACING_TARGET: &str = "rivulet::streams::dropped_error";

/// Installs a hook that logs dropped failures at `ERROR` level.
///
/// Returns the previously installed hook, if any.
pub fn install_tracing_dropped_error_hook() -> Option<DroppedErrorHook> {
  set_dropped_error_hook(log_dropped_error)
}

fn log_dropped_error(failure: &StreamError) {
  error!(target: TRACING_TARGET, %failure, "stream failure arrived after termination");
}
