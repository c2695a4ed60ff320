use rivulet_utils_rs::core::sync::SpinSyncMutex;

use super::stream_error::StreamError;


/// Receiver for failures nobody can be given through the stream.
pub type DroppedErrorHook = fn(&StreamError);

static HOOK: SpinSyncMutex<Option<DroppedErrorHook>> = SpinSyncMutex::new(None);

/// Serializes tests that manipulate the process-wide hook.
#[cfg(test)]
pub(crate) static HOOK_TEST_GUARD: SpinSyncMutex<()> = SpinSyncMutex::new(());

/// Installs the process-wide dropped-error hook, returning the previous one.
///
/// Failures that arrive after a stream fully terminated, and protocol
/// violations that must not terminate the stream, are handed to this hook.
pub fn set_dropped_error_hook(hook: DroppedErrorHook) -> Option<DroppedErrorHook> {
  HOOK.with_mut(|slot| slot.replace(hook))
}

/// Reports a failure to the process-wide hook, if one is installed.
pub fn report_dropped_error(error: &StreamError) {
  let hook = HOOK.with_mut(|slot| *slot);
  if let Some(hook) = hook {
    hook(error);
  }
}
