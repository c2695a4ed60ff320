//! Synchronization primitives.

/// Shared-ownership handle backed by `Arc`.
mod arc_shared;
/// Spin-based mutual exclusion wrapper.
mod spin_sync_mutex;
/// Weak counterpart of [`ArcShared`].
mod weak_shared;

pub use arc_shared::ArcShared;
pub use spin_sync_mutex::SpinSyncMutex;
pub use weak_shared::WeakShared;
