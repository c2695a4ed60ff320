/// Policy describing how a bounded queue handles capacity overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
  /// Refuse the new item, returning ownership to the caller.
  #[default]
  Reject,
  /// Drop the newest item when capacity is exhausted.
  DropNewest,
  /// Drop the oldest item when capacity is exhausted.
  DropOldest,
  /// Grow the underlying storage capacity.
  Grow,
}
