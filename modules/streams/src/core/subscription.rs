/// Demand and cancellation channel from a consumer to its producer.
pub trait Subscription: Send + Sync {
  /// Adds `n` elements of demand.
  ///
  /// Demand is cumulative and additive. Zero is a protocol violation: the
  /// producer reports it to the dropped-error hook and otherwise ignores the
  /// call, so the stream itself is not terminated by a misbehaving consumer.
  fn request(&self, n: u64);

  /// Cancels the stream.
  ///
  /// Idempotent; only the first call has effect. After cancellation no
  /// further elements, demand or buffered data are processed.
  fn cancel(&self);
}
