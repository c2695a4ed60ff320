/// Errors produced by queue operations.
///
/// Variants that refuse an element carry it, returning ownership to the
/// caller so no value is silently lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// The queue reached capacity and refused the item.
  Full(T),
  /// The queue is closed and refused the item.
  Closed(T),
  /// The queue holds no elements.
  Empty,
  /// The queue is closed and drained.
  Disconnected,
}

impl<T> QueueError<T> {
  /// Extracts the refused element from variants that carry one.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Full(item) | Self::Closed(item) => Some(item),
      | Self::Empty | Self::Disconnected => None,
    }
  }
}
