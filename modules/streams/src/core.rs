//! Protocol and operator modules.

/// Demand value decoded from the atomic counter.
mod demand;
/// Atomic accumulation of downstream demand.
mod demand_counter;
/// Process-wide reporting of failures nobody can receive.
mod dropped_error;
/// Single-owner aggregation of concurrent failures.
mod error_slot;
/// The flatten-iterable operator.
mod flatten_iterable;
/// Fusion negotiation modes.
mod fusion_mode;
/// Queue-backed subscription sub-protocol.
mod fused_subscription;
/// Adapter marking infallible sub-sequences.
mod ok_iter;
/// Element source abstraction.
mod publisher;
/// Stream error definitions.
mod stream_error;
/// Element consumer abstraction.
mod subscriber;
/// Demand and cancellation channel.
mod subscription;
/// Tagged subscription handle handed to subscribers.
mod subscription_handle;
/// Mutual-exclusion gate for drain-style loops.
mod work_gate;

#[cfg(test)]
pub(crate) use dropped_error::HOOK_TEST_GUARD;

pub use demand::Demand;
pub use demand_counter::DemandCounter;
pub use dropped_error::{report_dropped_error, set_dropped_error_hook, DroppedErrorHook};
pub use error_slot::ErrorSlot;
pub use flatten_iterable::{flatten_iterable, FlattenIterable};
pub use fused_subscription::FusedSubscription;
pub use fusion_mode::FusionMode;
pub use ok_iter::OkIter;
pub use publisher::Publisher;
pub use stream_error::StreamError;
pub use subscriber::Subscriber;
pub use subscription::Subscription;
pub use subscription_handle::SubscriptionHandle;
pub use work_gate::WorkGate;
