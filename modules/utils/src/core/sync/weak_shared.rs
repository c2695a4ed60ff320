use alloc::sync::Weak;

use super::arc_shared::ArcShared;

/// Weak counterpart of [`ArcShared`].
///
/// Used by self-referential values (a subscriber that must hand itself out as
/// a subscription) to hold a non-owning handle to their own allocation.
pub struct WeakShared<T: ?Sized>(Weak<T>);

impl<T: ?Sized> WeakShared<T> {
  /// Attempts to promote the weak handle into a strong one.
  #[must_use]
  pub fn upgrade(&self) -> Option<ArcShared<T>> {
    self.0.upgrade().map(ArcShared::from_arc)
  }

  pub(crate) const fn from_weak(inner: Weak<T>) -> Self {
    Self(inner)
  }
}

impl<T: ?Sized> Clone for WeakShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> core::fmt::Debug for WeakShared<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("WeakShared").finish()
  }
}
