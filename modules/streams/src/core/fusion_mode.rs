
/// Fusion negotiation modes.
///
/// Modes form a ladder: `None < Sync < Async`. A consumer requesting a mode
/// declares it can operate any mode at or below the request, so a grantee may
/// always answer with a weaker mode than asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FusionMode {
  /// No fusion: push delivery with queue and demand bookkeeping.
  #[default]
  None,
  /// Upstream is fully materialized and pulled synchronously.
  Sync,
  /// Upstream pushes into its own queue, which the consumer adopts.
  Async,
}

impl FusionMode {
  /// Returns `true` when a consumer requesting `self` can operate under the
  /// granted mode.
  #[must_use]
  pub const fn accepts(self, granted: FusionMode) -> bool {
    match self {
      | Self::None => matches!(granted, Self::None),
      | Self::Sync => matches!(granted, Self::None | Self::Sync),
      | Self::Async => true,
    }
  }

  /// Returns `true` when the mode enables the pull sub-protocol.
  #[must_use]
  pub const fn is_fused(self) -> bool {
    !matches!(self, Self::None)
  }
}
