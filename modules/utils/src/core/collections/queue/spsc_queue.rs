use crate::core::{
  collections::queue::{OfferOutcome, OverflowPolicy, QueueError, SpscRingBackend},
  sync::{ArcShared, SpinSyncMutex},
};


/// Cloneable handle over a bounded single-producer/single-consumer queue.
///
/// The handle itself is safe to share freely; the SPSC name records the
/// intended contract: one call site offers, one call site polls. Maintenance
/// operations (`clear`, `close`, probes) may come from either side.
pub struct SpscQueue<T> {
  inner: ArcShared<SpinSyncMutex<SpscRingBackend<T>>>,
}

impl<T> SpscQueue<T> {
  /// Creates a bounded queue that rejects items once full.
  #[must_use]
  pub fn bounded(capacity: usize) -> Self {
    Self::with_policy(capacity, OverflowPolicy::Reject)
  }

  /// Creates a bounded queue with an explicit overflow policy.
  #[must_use]
  pub fn with_policy(capacity: usize, policy: OverflowPolicy) -> Self {
    Self { inner: ArcShared::new(SpinSyncMutex::new(SpscRingBackend::new(capacity, policy))) }
  }

  /// Attempts to enqueue an item.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] or [`QueueError::Closed`], giving the item
  /// back to the caller.
  pub fn offer(&self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    self.inner.with_mut(|backend| backend.offer(item))
  }

  /// Attempts to dequeue an item.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when nothing is buffered, or
  /// [`QueueError::Disconnected`] when the queue is empty and closed.
  pub fn poll(&self) -> Result<T, QueueError<T>> {
    self.inner.with_mut(SpscRingBackend::poll)
  }

  /// Dequeues an item when one is available.
  #[must_use]
  pub fn try_poll(&self) -> Option<T> {
    self.poll().ok()
  }

  /// Returns the number of buffered elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.with_mut(|backend| backend.len())
  }

  /// Indicates whether the queue is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.with_mut(|backend| backend.is_empty())
  }

  /// Returns the capacity limit.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.inner.with_mut(|backend| backend.capacity())
  }

  /// Drops every buffered element.
  pub fn clear(&self) {
    self.inner.with_mut(SpscRingBackend::clear);
  }

  /// Marks the queue closed; later offers are refused.
  pub fn close(&self) {
    self.inner.with_mut(SpscRingBackend::close);
  }
}

impl<T> Clone for SpscQueue<T> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<T> core::fmt::Debug for SpscQueue<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("SpscQueue").field("len", &self.len()).field("capacity", &self.capacity()).finish()
  }
}
