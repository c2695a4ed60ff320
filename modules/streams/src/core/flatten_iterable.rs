use core::marker::PhantomData;

use rivulet_utils_rs::core::sync::ArcShared;

use super::{
  ok_iter::OkIter, publisher::Publisher, stream_error::StreamError, subscriber::Subscriber,
};
use self::subscriber::FlattenIterableSubscriber;

/// Gate-exclusive mutable drain state.
mod drain_core;
/// Owned-queue versus adopted-upstream element intake.
mod element_intake;
/// The operator's fused subscriber.
mod subscriber;
/// Once-set post-handshake upstream state.
mod upstream_state;


/// Stage expanding each upstream element into a sub-sequence.
///
/// Every element of the source is mapped through the expansion function to an
/// ordered sub-sequence whose elements are delivered downstream one by one,
/// in outer-then-inner order, bounded by the demand the downstream consumer
/// granted. Upstream demand is issued in batches of `prefetch` and
/// replenished once three quarters of a batch were consumed.
pub struct FlattenIterable<T, R, F, I> {
  source:   ArcShared<dyn Publisher<T>>,
  expand:   F,
  prefetch: usize,
  _marker:  PhantomData<fn(T) -> (R, I)>,
}

impl<T, R, F, I> FlattenIterable<T, R, F, I>
where
  F: FnMut(T) -> Result<I, StreamError>,
  I: IntoIterator<Item = Result<R, StreamError>>,
{
  /// Upstream batch size used when none is specified.
  pub const DEFAULT_PREFETCH: usize = 128;

  /// Creates the stage with the default prefetch.
  pub fn new(source: ArcShared<dyn Publisher<T>>, expand: F) -> Self {
    Self::with_prefetch(source, expand, Self::DEFAULT_PREFETCH)
  }

  /// Creates the stage with an explicit prefetch.
  ///
  /// # Panics
  ///
  /// Panics when `prefetch` is zero.
  pub fn with_prefetch(source: ArcShared<dyn Publisher<T>>, expand: F, prefetch: usize) -> Self {
    assert!(prefetch > 0, "prefetch must be greater than zero");
    Self { source, expand, prefetch, _marker: PhantomData }
  }
}

impl<T, R, F, I> Publisher<R> for FlattenIterable<T, R, F, I>
where
  T: Send + 'static,
  R: Send + 'static,
  F: FnMut(T) -> Result<I, StreamError> + Clone + Send + Sync + 'static,
  I: IntoIterator<Item = Result<R, StreamError>> + 'static,
  I::IntoIter: Send + 'static,
{
  fn subscribe(&self, subscriber: ArcShared<dyn Subscriber<R>>) {
    let inner = FlattenIterableSubscriber::shared(subscriber, self.expand.clone(), self.prefetch);
    self.source.subscribe(inner.into_dyn(|value| value as &dyn Subscriber<T>));
  }
}

/// Builds a flatten-iterable stage from an infallible expansion function.
///
/// Sub-sequence elements are wrapped in [`OkIter`], so plain `IntoIterator`
/// expansions work without spelling out the `Result` plumbing.
///
/// # Panics
///
/// Panics when `prefetch` is zero.
pub fn flatten_iterable<T, R, G, J>(
  source: ArcShared<dyn Publisher<T>>,
  mut expand: G,
  prefetch: usize,
) -> FlattenIterable<T, R, impl FnMut(T) -> Result<OkIter<J::IntoIter>, StreamError> + Clone + Send + Sync + 'static, OkIter<J::IntoIter>>
where
  T: Send + 'static,
  R: Send + 'static,
  G: FnMut(T) -> J + Clone + Send + Sync + 'static,
  J: IntoIterator<Item = R> + 'static,
{
  FlattenIterable::with_prefetch(source, move |element| Ok(OkIter::new(expand(element).into_iter())), prefetch)
}
