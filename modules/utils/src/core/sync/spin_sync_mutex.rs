use spin::mutex::SpinMutex;


/// Spin-based mutual exclusion wrapper.
///
/// Thin newtype over [`spin::mutex::SpinMutex`] so the rest of the workspace
/// depends on one lock vocabulary. Critical sections guarded by this type
/// must stay short and must never call back into code that could take the
/// same lock.
pub struct SpinSyncMutex<T: ?Sized>(SpinMutex<T>);

impl<T> SpinSyncMutex<T> {
  /// Creates a new mutex holding the provided value.
  pub const fn new(value: T) -> Self {
    Self(SpinMutex::new(value))
  }

  /// Consumes the mutex and returns the inner value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }
}

impl<T: ?Sized> SpinSyncMutex<T> {
  /// Locks the mutex, spinning until it becomes available.
  pub fn lock(&self) -> spin::mutex::SpinMutexGuard<'_, T> {
    self.0.lock()
  }

  /// Runs the closure with exclusive access to the inner value.
  pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    f(&mut self.0.lock())
  }
}

impl<T: Default> Default for SpinSyncMutex<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T: ?Sized + core::fmt::Debug> core::fmt::Debug for SpinSyncMutex<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.0.try_lock() {
      | Some(guard) => f.debug_tuple("SpinSyncMutex").field(&&*guard).finish(),
      | None => f.write_str("SpinSyncMutex(<locked>)"),
    }
  }
}
