use alloc::collections::{TryReserveError, VecDeque};


/// Bounded ring storage backed by [`VecDeque`].
///
/// The capacity limit is tracked separately from the deque's own allocation
/// so a `Grow` policy can raise it explicitly; all other policies treat the
/// limit as hard.
pub struct RingStorage<T> {
  buffer: VecDeque<T>,
  limit:  usize,
}

impl<T> RingStorage<T> {
  /// Creates storage with the specified capacity limit.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { buffer: VecDeque::with_capacity(capacity), limit: capacity }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  /// Indicates whether the storage is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  /// Indicates whether the storage is at its capacity limit.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.len() >= self.limit
  }

  /// Returns the capacity limit.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.limit
  }

  /// Pushes an element to the back of the buffer.
  ///
  /// Callers check [`is_full`](Self::is_full) first; pushing past the limit
  /// is a contract violation.
  pub fn push_back(&mut self, value: T) {
    debug_assert!(!self.is_full());
    self.buffer.push_back(value);
  }

  /// Pops an element from the front of the buffer.
  pub fn pop_front(&mut self) -> Option<T> {
    self.buffer.pop_front()
  }

  /// Drops every stored element.
  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Attempts to raise the capacity limit to the provided value.
  ///
  /// # Errors
  ///
  /// Returns [`TryReserveError`] when the allocation fails; the limit is left
  /// unchanged in that case.
  pub fn try_grow(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
    if new_capacity <= self.limit {
      return Ok(());
    }
    let additional = new_capacity - self.buffer.len();
    self.buffer.try_reserve(additional)?;
    self.limit = new_capacity;
    Ok(())
  }
}

impl<T: core::fmt::Debug> core::fmt::Debug for RingStorage<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RingStorage").field("len", &self.len()).field("limit", &self.limit).finish()
  }
}
