/// Outcome of a successful enqueue attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferOutcome {
  /// The item was appended without side effects.
  Enqueued,
  /// The new item was dropped in favor of the buffered ones.
  DroppedNewest,
  /// The oldest buffered item was dropped to make room.
  DroppedOldest {
    /// Number of items removed.
    count: usize,
  },
  /// The storage grew to accept the item.
  GrewTo {
    /// Capacity after growth.
    capacity: usize,
  },
}
