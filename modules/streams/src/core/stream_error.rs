use alloc::{boxed::Box, string::String, vec::Vec};

#[cfg(test)]
mod tests;

/// Errors carried by stream signals.
///
/// A stream terminates with exactly one of these; failures that race the
/// first one are folded into [`StreamError::Composite`] so no cause is lost.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StreamError {
  /// Downstream requested zero demand.
  #[error("demand must be positive")]
  InvalidDemand,
  /// A subscriber received a second subscription.
  #[error("subscription already set")]
  AlreadySubscribed,
  /// Upstream delivered beyond the granted demand and overflowed the queue.
  #[error("backpressure violated: element queue is full")]
  BackpressureViolated,
  /// The expansion function failed to produce a sub-sequence.
  #[error("expansion failed: {0}")]
  Expansion(String),
  /// A sub-sequence failed while advancing.
  #[error("sub-sequence advance failed: {0}")]
  Advance(String),
  /// Upstream signalled a failure.
  #[error("upstream failed: {0}")]
  Upstream(String),
  /// A primary failure with later concurrent failures attached.
  #[error("{primary} (+{} suppressed)", .suppressed.len())]
  Composite {
    /// The failure that terminated the stream.
    primary:    Box<StreamError>,
    /// Later failures, in arrival order.
    suppressed: Vec<StreamError>,
  },
}

impl StreamError {
  /// Creates an expansion failure from any message.
  pub fn expansion(message: impl Into<String>) -> Self {
    Self::Expansion(message.into())
  }

  /// Creates an advance failure from any message.
  pub fn advance(message: impl Into<String>) -> Self {
    Self::Advance(message.into())
  }

  /// Creates an upstream failure from any message.
  pub fn upstream(message: impl Into<String>) -> Self {
    Self::Upstream(message.into())
  }

  /// Attaches a later failure, building or extending the composite.
  #[must_use]
  pub fn merge(self, later: StreamError) -> Self {
    match self {
      | Self::Composite { primary, mut suppressed } => {
        suppressed.push(later);
        Self::Composite { primary, suppressed }
      },
      | primary => Self::Composite { primary: Box::new(primary), suppressed: alloc::vec![later] },
    }
  }

  /// Returns the failure that terminated the stream.
  #[must_use]
  pub fn primary(&self) -> &StreamError {
    match self {
      | Self::Composite { primary, .. } => primary,
      | other => other,
    }
  }

  /// Returns the later failures attached to this one.
  #[must_use]
  pub fn suppressed(&self) -> &[StreamError] {
    match self {
      | Self::Composite { suppressed, .. } => suppressed,
      | _ => &[],
    }
  }
}
