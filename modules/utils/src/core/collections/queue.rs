//! Bounded queue primitives.

/// Enqueue outcome vocabulary.
mod offer_outcome;
/// Capacity overflow policies.
mod overflow_policy;
/// Queue error definitions.
mod queue_error;
/// Bounded ring storage.
mod ring_storage;
/// Single-producer/single-consumer queue handle.
mod spsc_queue;
/// Ring-backed queue state machine.
mod spsc_ring_backend;

pub use offer_outcome::OfferOutcome;
pub use overflow_policy::OverflowPolicy;
pub use queue_error::QueueError;
pub use ring_storage::RingStorage;
pub use spsc_queue::SpscQueue;
pub use spsc_ring_backend::SpscRingBackend;
