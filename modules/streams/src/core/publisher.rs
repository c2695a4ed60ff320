use rivulet_utils_rs::core::sync::ArcShared;

use super::subscriber::Subscriber;

/// Producer side of the stream handshake.
pub trait Publisher<T>: Send + Sync {
  /// Connects the subscriber and starts the handshake.
  ///
  /// The implementation must call `Subscriber::on_subscribe` exactly once
  /// before delivering any other signal.
  fn subscribe(&self, subscriber: ArcShared<dyn Subscriber<T>>);
}
