//! Collection primitives.

/// Bounded queue primitives.
pub mod queue;
