use crate::core::{fusion_mode::FusionMode, subscription_handle::SubscriptionHandle};

use super::element_intake::ElementIntake;

/// Upstream wiring fixed by the subscription handshake.
///
/// Installed exactly once when the upstream subscription arrives and
/// immutable afterwards, so every call site reads it without coordination.
pub(super) struct UpstreamState<T> {
  pub(super) subscription: SubscriptionHandle<T>,
  pub(super) intake:       ElementIntake<T>,
  pub(super) mode:         FusionMode,
}
