use alloc::sync::Arc;
use core::ptr;

use super::weak_shared::WeakShared;


/// Shared-ownership handle backed by [`alloc::sync::Arc`].
///
/// The stream crates pass subscribers and subscriptions around as shared
/// handles; keeping the wrapper in one place lets every crate agree on the
/// conversion and identity rules without repeating `Arc` plumbing.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T: ?Sized> ArcShared<T> {
  /// Creates a new shared handle by wrapping the provided value.
  pub fn new(value: T) -> Self
  where
    T: Sized, {
    Self(Arc::new(value))
  }

  /// Creates a shared handle whose value may hold a weak reference to itself.
  pub fn new_cyclic<F>(build: F) -> Self
  where
    T: Sized,
    F: FnOnce(&WeakShared<T>) -> T, {
    Self(Arc::new_cyclic(|weak| build(&WeakShared::from_weak(weak.clone()))))
  }

  /// Returns a weak handle to the same allocation.
  #[must_use]
  pub fn downgrade(&self) -> WeakShared<T> {
    WeakShared::from_weak(Arc::downgrade(&self.0))
  }

  /// Returns `true` when both handles point to the same allocation.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }

  /// Converts the handle into another, dynamically sized representation.
  ///
  /// The closure receives the stored value and must return the same value
  /// under the target unsized type, which keeps the conversion expressible on
  /// stable Rust without `CoerceUnsized`.
  pub fn into_dyn<U: ?Sized, F>(self, cast: F) -> ArcShared<U>
  where
    F: FnOnce(&T) -> &U, {
    let raw = Arc::into_raw(self.0);
    // SAFETY: `raw` originates from `Arc::into_raw` above and stays valid for
    // the duration of this call; `cast` only reinterprets the same allocation
    // under an unsized type, so reconstructing the `Arc` from the cast
    // pointer transfers the original strong count unchanged.
    unsafe {
      let cast_ptr = ptr::from_ref(cast(&*raw));
      ArcShared(Arc::from_raw(cast_ptr))
    }
  }

  pub(crate) const fn from_arc(inner: Arc<T>) -> Self {
    Self(inner)
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> core::ops::Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized + core::fmt::Debug> core::fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("ArcShared").field(&&self.0).finish()
  }
}
