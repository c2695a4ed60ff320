use alloc::string::ToString;

use crate::core::{ErrorSlot, StreamError};

#[test]
fn adopts_the_first_failure() {
  let slot = ErrorSlot::new();
  assert!(!slot.is_set());
  slot.record(StreamError::BackpressureViolated).expect("record");
  assert!(slot.is_set());
  assert_eq!(slot.take(), Some(StreamError::BackpressureViolated));
}

#[test]
fn later_failures_merge_instead_of_dropping() {
  let slot = ErrorSlot::new();
  slot.record(StreamError::upstream("first")).expect("record");
  slot.record(StreamError::expansion("second")).expect("record");
  let taken = slot.take().expect("failure pending");
  assert_eq!(taken.primary(), &StreamError::Upstream("first".to_string()));
  assert_eq!(taken.suppressed(), &[StreamError::Expansion("second".to_string())]);
}

#[test]
fn take_delivers_exactly_once() {
  let slot = ErrorSlot::new();
  slot.record(StreamError::InvalidDemand).expect("record");
  assert_eq!(slot.take(), Some(StreamError::InvalidDemand));
  assert_eq!(slot.take(), None);
}

#[test]
fn recording_after_take_returns_the_failure() {
  let slot = ErrorSlot::new();
  slot.record(StreamError::BackpressureViolated).expect("record");
  let _ = slot.take();
  let refused = slot.record(StreamError::expansion("late"));
  assert_eq!(refused, Err(StreamError::Expansion("late".to_string())));
}

#[test]
fn sealing_refuses_later_failures() {
  let slot = ErrorSlot::new();
  slot.seal();
  let refused = slot.record(StreamError::InvalidDemand);
  assert_eq!(refused, Err(StreamError::InvalidDemand));
  assert_eq!(slot.take(), None);
}
