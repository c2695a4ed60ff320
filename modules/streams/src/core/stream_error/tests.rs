use alloc::{boxed::Box, format, string::ToString, vec};

use crate::core::StreamError;

#[test]
fn merge_builds_a_composite_around_the_first_failure() {
  let merged = StreamError::BackpressureViolated.merge(StreamError::expansion("boom"));
  assert_eq!(merged.primary(), &StreamError::BackpressureViolated);
  assert_eq!(merged.suppressed(), &[StreamError::Expansion("boom".to_string())]);
}

#[test]
fn merge_extends_an_existing_composite_in_arrival_order() {
  let merged = StreamError::upstream("first")
    .merge(StreamError::expansion("second"))
    .merge(StreamError::advance("third"));
  assert_eq!(merged.primary(), &StreamError::Upstream("first".to_string()));
  assert_eq!(
    merged.suppressed(),
    &[StreamError::Expansion("second".to_string()), StreamError::Advance("third".to_string())]
  );
}

#[test]
fn plain_failures_have_no_suppressed_causes() {
  let error = StreamError::InvalidDemand;
  assert_eq!(error.primary(), &StreamError::InvalidDemand);
  assert!(error.suppressed().is_empty());
}

#[test]
fn composite_display_counts_the_suppressed_causes() {
  let composite = StreamError::Composite {
    primary:    Box::new(StreamError::BackpressureViolated),
    suppressed: vec![StreamError::InvalidDemand, StreamError::InvalidDemand],
  };
  let rendered = format!("{composite}");
  assert!(rendered.contains("backpressure violated"));
  assert!(rendered.contains("+2 suppressed"));
}
