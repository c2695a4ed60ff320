use core::iter::Peekable;

use crate::core::stream_error::StreamError;

/// Result of probing the active cursor for more elements.
pub(super) enum CursorProbe {
  /// The cursor has at least one more element.
  More,
  /// The cursor is exhausted.
  Exhausted,
  /// The cursor failed while advancing.
  Failed(StreamError),
}

/// Mutable state touched only while the work gate is held.
///
/// The expansion function, the cursor over the sub-sequence currently being
/// unrolled and the consumed-outer-element count all live here; the gate (or,
/// for the pull interface, the fusion contract) guarantees a single caller,
/// and the surrounding spin mutex makes that guarantee sound.
pub(super) struct DrainCore<F, I>
where I: IntoIterator
{
  pub(super) expand:   F,
  pub(super) cursor:   Option<Peekable<I::IntoIter>>,
  pub(super) consumed: usize,
}

impl<F, I> DrainCore<F, I>
where I: IntoIterator
{
  pub(super) const fn new(expand: F) -> Self {
    Self { expand, cursor: None, consumed: 0 }
  }
}

impl<F, I, R> DrainCore<F, I>
where I: IntoIterator<Item = Result<R, StreamError>>
{
  /// Peeks past the cursor's position without emitting.
  ///
  /// An `Err` item discovered by the probe is consumed and surfaced as
  /// [`CursorProbe::Failed`], mirroring a sub-sequence that fails while
  /// being advanced.
  pub(super) fn probe_cursor(&mut self) -> CursorProbe {
    let Some(cursor) = self.cursor.as_mut() else {
      return CursorProbe::Exhausted;
    };
    let failed = match cursor.peek() {
      | None => return CursorProbe::Exhausted,
      | Some(Ok(_)) => false,
      | Some(Err(_)) => true,
    };
    if failed {
      if let Some(Err(error)) = cursor.next() {
        return CursorProbe::Failed(error);
      }
      return CursorProbe::Exhausted;
    }
    CursorProbe::More
  }
}
