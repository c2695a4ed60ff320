use portable_atomic::{AtomicU64, Ordering};

use super::demand::Demand;


/// Atomic accumulation of downstream demand.
///
/// Additions saturate at the unbounded sentinel and stay there; production
/// subtracts only while the demand is still finite.
#[derive(Debug)]
pub struct DemandCounter {
  value: AtomicU64,
}

impl DemandCounter {
  /// Creates a counter with zero outstanding demand.
  #[must_use]
  pub const fn new() -> Self {
    Self { value: AtomicU64::new(0) }
  }

  /// Adds demand, saturating at the unbounded sentinel.
  ///
  /// Returns the demand after the addition.
  pub fn add(&self, amount: u64) -> Demand {
    let mut current = self.value.load(Ordering::Acquire);
    loop {
      if current == Demand::UNBOUNDED_RAW {
        return Demand::Unbounded;
      }
      let next = current.saturating_add(amount);
      match self.value.compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire) {
        | Ok(_) => return Demand::from_raw(next),
        | Err(observed) => current = observed,
      }
    }
  }

  /// Subtracts delivered elements, unless the demand is unbounded.
  pub fn produced(&self, amount: u64) {
    let mut current = self.value.load(Ordering::Acquire);
    loop {
      if current == Demand::UNBOUNDED_RAW {
        return;
      }
      let next = current.saturating_sub(amount);
      match self.value.compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire) {
        | Ok(_) => return,
        | Err(observed) => current = observed,
      }
    }
  }

  /// Returns the raw counter value.
  #[must_use]
  pub fn raw(&self) -> u64 {
    self.value.load(Ordering::Acquire)
  }

  /// Returns the decoded demand.
  #[must_use]
  pub fn current(&self) -> Demand {
    Demand::from_raw(self.raw())
  }
}

impl Default for DemandCounter {
  fn default() -> Self {
    Self::new()
  }
}
