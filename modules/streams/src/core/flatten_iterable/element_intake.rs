use rivulet_utils_rs::core::{collections::queue::SpscQueue, sync::ArcShared};

use crate::core::{fused_subscription::FusedSubscription, stream_error::StreamError};

/// Where the drain loop takes its outer elements from.
///
/// Non-fused subscriptions buffer into an owned bounded queue; an async-fused
/// upstream keeps its own queue, which the operator adopts through the fusion
/// pull interface instead of duplicating the buffering.
pub(super) enum ElementIntake<T> {
  /// Owned single-producer/single-consumer queue.
  Owned(SpscQueue<T>),
  /// Adopted queue of a fused upstream.
  Fused(ArcShared<dyn FusedSubscription<T>>),
}

impl<T: 'static> ElementIntake<T> {
  /// Dequeues the next outer element.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] when a fused upstream fails to produce.
  pub(super) fn poll(&self) -> Result<Option<T>, StreamError> {
    match self {
      | Self::Owned(queue) => Ok(queue.try_poll()),
      | Self::Fused(subscription) => subscription.poll(),
    }
  }

  /// Best-effort emptiness probe.
  pub(super) fn is_empty(&self) -> bool {
    match self {
      | Self::Owned(queue) => queue.is_empty(),
      | Self::Fused(subscription) => subscription.is_empty(),
    }
  }

  /// Discards buffered elements.
  pub(super) fn clear(&self) {
    match self {
      | Self::Owned(queue) => queue.clear(),
      | Self::Fused(subscription) => subscription.clear(),
    }
  }
}
