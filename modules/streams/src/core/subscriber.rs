use super::{stream_error::StreamError, subscription_handle::SubscriptionHandle};

/// Consumer side of the stream handshake.
///
/// A producer calls [`on_subscribe`](Self::on_subscribe) exactly once before
/// any data, then any number of [`on_next`](Self::on_next) calls bounded by
/// the demand the subscriber issued, then at most one terminal signal.
pub trait Subscriber<T>: Send + Sync {
  /// Receives the subscription before any data flows.
  fn on_subscribe(&self, subscription: SubscriptionHandle<T>);

  /// Receives one element.
  fn on_next(&self, element: T);

  /// Receives the terminal failure.
  fn on_error(&self, error: StreamError);

  /// Receives the terminal completion.
  fn on_complete(&self);

  /// Signal from an async-fused upstream that it buffered an element.
  ///
  /// Only meaningful after the subscriber negotiated
  /// [`FusionMode::Async`](super::FusionMode::Async) through its
  /// subscription; the element itself is retrieved by polling. Subscribers
  /// that never negotiate fusion keep the default no-op.
  fn on_pushed(&self) {}
}
