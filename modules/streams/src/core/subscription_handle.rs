use rivulet_utils_rs::core::sync::ArcShared;

use super::{fused_subscription::FusedSubscription, subscription::Subscription};

/// Tagged subscription handle handed to subscribers.
///
/// Replaces open-ended capability probing: a producer that supports the
/// fusion sub-protocol hands out the [`Fused`](Self::Fused) variant, and a
/// consumer that does not care treats both variants uniformly through the
/// [`Subscription`] impl.
pub enum SubscriptionHandle<T> {
  /// Push-only subscription.
  Plain(ArcShared<dyn Subscription>),
  /// Subscription offering the fusion sub-protocol.
  Fused(ArcShared<dyn FusedSubscription<T>>),
}

impl<T> SubscriptionHandle<T> {
  /// Returns the fused form when the producer offers one.
  #[must_use]
  pub fn as_fused(&self) -> Option<&ArcShared<dyn FusedSubscription<T>>> {
    match self {
      | Self::Fused(subscription) => Some(subscription),
      | Self::Plain(_) => None,
    }
  }
}

impl<T> Subscription for SubscriptionHandle<T>
where T: 'static
{
  fn request(&self, n: u64) {
    match self {
      | Self::Plain(subscription) => subscription.request(n),
      | Self::Fused(subscription) => subscription.request(n),
    }
  }

  fn cancel(&self) {
    match self {
      | Self::Plain(subscription) => subscription.cancel(),
      | Self::Fused(subscription) => subscription.cancel(),
    }
  }
}

impl<T> Clone for SubscriptionHandle<T> {
  fn clone(&self) -> Self {
    match self {
      | Self::Plain(subscription) => Self::Plain(subscription.clone()),
      | Self::Fused(subscription) => Self::Fused(subscription.clone()),
    }
  }
}

impl<T> core::fmt::Debug for SubscriptionHandle<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      | Self::Plain(_) => f.write_str("SubscriptionHandle::Plain"),
      | Self::Fused(_) => f.write_str("SubscriptionHandle::Fused"),
    }
  }
}
