use portable_atomic::{AtomicBool, Ordering};
use rivulet_utils_rs::core::sync::SpinSyncMutex;

use super::stream_error::StreamError;

#[cfg(test)]
mod tests;

/// Single-owner aggregation of concurrent failures.
///
/// The first recorded failure is adopted; failures recorded while one is
/// already pending are merged into its composite instead of being dropped.
/// Once the slot is sealed (the failure was delivered, or the stream
/// completed or was cancelled), recording refuses and hands the failure back
/// so the caller can route it to the dropped-error reporter.
#[derive(Debug)]
pub struct ErrorSlot {
  sealed:  AtomicBool,
  pending: SpinSyncMutex<Option<StreamError>>,
}

impl ErrorSlot {
  /// Creates an empty, unsealed slot.
  #[must_use]
  pub const fn new() -> Self {
    Self { sealed: AtomicBool::new(false), pending: SpinSyncMutex::new(None) }
  }

  /// Adopts or merges the failure.
  ///
  /// # Errors
  ///
  /// Returns the failure back when the slot is already sealed.
  pub fn record(&self, error: StreamError) -> Result<(), StreamError> {
    if self.sealed.load(Ordering::Acquire) {
      return Err(error);
    }
    let mut pending = self.pending.lock();
    if self.sealed.load(Ordering::Acquire) {
      return Err(error);
    }
    *pending = match pending.take() {
      | Some(existing) => Some(existing.merge(error)),
      | None => Some(error),
    };
    Ok(())
  }

  /// Takes the pending failure, sealing the slot when one was present.
  #[must_use]
  pub fn take(&self) -> Option<StreamError> {
    let mut pending = self.pending.lock();
    let taken = pending.take();
    if taken.is_some() {
      self.sealed.store(true, Ordering::Release);
    }
    taken
  }

  /// Seals the slot without taking a failure.
  ///
  /// Used on the completion and cancellation paths so later failures are
  /// refused rather than parked where nobody will read them.
  pub fn seal(&self) {
    self.sealed.store(true, Ordering::Release);
  }

  /// Indicates whether a failure is pending.
  #[must_use]
  pub fn is_set(&self) -> bool {
    self.pending.lock().is_some()
  }
}

impl Default for ErrorSlot {
  fn default() -> Self {
    Self::new()
  }
}
