/// Demand decoded from the raw atomic counter value.
///
/// `u64::MAX` is the saturating "unbounded" sentinel; every smaller value is
/// an exact outstanding count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demand {
  /// Exact outstanding demand.
  Finite(u64),
  /// Demand saturated; accounting is suspended.
  Unbounded,
}

impl Demand {
  /// Raw counter value representing unbounded demand.
  pub const UNBOUNDED_RAW: u64 = u64::MAX;

  /// Decodes a raw counter value.
  #[must_use]
  pub const fn from_raw(raw: u64) -> Self {
    if raw == Self::UNBOUNDED_RAW {
      Self::Unbounded
    } else {
      Self::Finite(raw)
    }
  }

  /// Encodes the demand back into a raw counter value.
  #[must_use]
  pub const fn into_raw(self) -> u64 {
    match self {
      | Self::Finite(value) => value,
      | Self::Unbounded => Self::UNBOUNDED_RAW,
    }
  }

  /// Returns `true` when the demand is unbounded.
  #[must_use]
  pub const fn is_unbounded(&self) -> bool {
    matches!(self, Self::Unbounded)
  }

  /// Returns `true` when at least one element may be delivered.
  #[must_use]
  pub const fn allows_delivery(&self) -> bool {
    match self {
      | Self::Unbounded => true,
      | Self::Finite(value) => *value > 0,
    }
  }
}
