use portable_atomic::{AtomicU32, Ordering};

#[cfg(test)]
mod tests;

/// Mutual-exclusion gate for drain-style loops.
///
/// Every call site that wants the guarded body to run calls
/// [`enter`](Self::enter); only the caller observing the zero-to-nonzero
/// transition may execute it. The winner repeats the body until
/// [`leave`](Self::leave) reports that no further entries arrived during its
/// run, so concurrently signalled work is never lost. Terminal paths simply
/// never call `leave`, which keeps the gate occupied and suppresses every
/// later entry.
#[derive(Debug)]
pub struct WorkGate {
  missed: AtomicU32,
}

impl WorkGate {
  /// Creates an idle gate.
  #[must_use]
  pub const fn new() -> Self {
    Self { missed: AtomicU32::new(0) }
  }

  /// Registers the caller's intent to run the guarded body.
  ///
  /// Returns `true` only for the caller that moved the gate from idle to
  /// occupied; that caller must run the body.
  pub fn enter(&self) -> bool {
    self.missed.fetch_add(1, Ordering::AcqRel) == 0
  }

  /// Retires `keys` observed entries and returns how many remain.
  ///
  /// A nonzero return means further entries arrived while the body ran; the
  /// owner must loop again with the returned count.
  pub fn leave(&self, keys: u32) -> u32 {
    self.missed.fetch_sub(keys, Ordering::AcqRel) - keys
  }

  /// Returns the number of unretired entries.
  #[must_use]
  pub fn pending(&self) -> u32 {
    self.missed.load(Ordering::Acquire)
  }
}

impl Default for WorkGate {
  fn default() -> Self {
    Self::new()
  }
}
