use core::cmp;

use super::{OfferOutcome, OverflowPolicy, QueueError, RingStorage};


/// Ring-backed queue state machine.
///
/// Combines [`RingStorage`] with an [`OverflowPolicy`] and a closed flag.
/// Synchronization is layered on top by [`SpscQueue`](super::SpscQueue); this
/// type itself is single-threaded.
pub struct SpscRingBackend<T> {
  storage: RingStorage<T>,
  policy:  OverflowPolicy,
  closed:  bool,
}

impl<T> SpscRingBackend<T> {
  /// Creates a backend with the given capacity and overflow policy.
  #[must_use]
  pub fn new(capacity: usize, policy: OverflowPolicy) -> Self {
    Self { storage: RingStorage::with_capacity(capacity), policy, closed: false }
  }

  /// Attempts to enqueue an item.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Closed`] after [`close`](Self::close), and
  /// [`QueueError::Full`] when the queue is at capacity under the rejecting
  /// policy. Both variants give the item back.
  pub fn offer(&mut self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    if self.closed {
      return Err(QueueError::Closed(item));
    }
    if self.storage.is_full() {
      return self.handle_full(item);
    }
    self.storage.push_back(item);
    Ok(OfferOutcome::Enqueued)
  }

  /// Attempts to dequeue an item.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when nothing is buffered, or
  /// [`QueueError::Disconnected`] when the queue is both empty and closed.
  pub fn poll(&mut self) -> Result<T, QueueError<T>> {
    match self.storage.pop_front() {
      | Some(item) => Ok(item),
      | None if self.closed => Err(QueueError::Disconnected),
      | None => Err(QueueError::Empty),
    }
  }

  /// Returns the number of buffered elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.storage.len()
  }

  /// Indicates whether the queue is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.storage.is_empty()
  }

  /// Returns the capacity limit.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  /// Drops every buffered element.
  pub fn clear(&mut self) {
    self.storage.clear();
  }

  /// Marks the queue closed; later offers are refused.
  pub fn close(&mut self) {
    self.closed = true;
  }

  /// Indicates whether the queue is closed.
  #[must_use]
  pub const fn is_closed(&self) -> bool {
    self.closed
  }

  fn handle_full(&mut self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    match self.policy {
      | OverflowPolicy::Reject => Err(QueueError::Full(item)),
      | OverflowPolicy::DropNewest => {
        drop(item);
        Ok(OfferOutcome::DroppedNewest)
      },
      | OverflowPolicy::DropOldest => {
        let _ = self.storage.pop_front();
        self.storage.push_back(item);
        Ok(OfferOutcome::DroppedOldest { count: 1 })
      },
      | OverflowPolicy::Grow => {
        let current = self.storage.capacity();
        let next = cmp::max(self.storage.len() + 1, cmp::max(1, current.saturating_mul(2)));
        match self.storage.try_grow(next) {
          | Ok(()) => {
            self.storage.push_back(item);
            Ok(OfferOutcome::GrewTo { capacity: next })
          },
          | Err(_) => Err(QueueError::Full(item)),
        }
      },
    }
  }
}
