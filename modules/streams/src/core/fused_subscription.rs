use super::{fusion_mode::FusionMode, stream_error::StreamError, subscription::Subscription};

/// Queue-backed subscription offering the operator-fusion sub-protocol.
///
/// A producer exposing this trait lets its consumer pull elements directly
/// instead of receiving pushes through an intermediate queue. The pull side
/// must stay single-threaded: a fused consumer either receives pushes or
/// polls, never both concurrently.
pub trait FusedSubscription<T>: Subscription {
  /// One-time negotiation.
  ///
  /// `requested` is the strongest mode the consumer can operate; the
  /// returned grant is at most that strong (see
  /// [`FusionMode::accepts`]). Implementations decline by returning
  /// [`FusionMode::None`].
  fn request_fusion(&self, requested: FusionMode) -> FusionMode;

  /// Pulls the next element.
  ///
  /// Returns `Ok(None)` when nothing is currently available; under
  /// [`FusionMode::Sync`] that means the stream is exhausted.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] when producing the element failed; the caller
  /// owns the failure from then on.
  fn poll(&self) -> Result<Option<T>, StreamError>;

  /// Best-effort emptiness probe; not transactional with [`poll`](Self::poll).
  fn is_empty(&self) -> bool;

  /// Discards buffered elements and any partially consumed state.
  fn clear(&self);
}
