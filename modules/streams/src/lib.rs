#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![no_std]

//! Backpressured reactive-stream protocol and operators.
//!
//! The crate implements the conventional publisher/subscriber handshake with
//! additive demand, idempotent cancellation and an operator-fusion
//! sub-protocol, together with the flatten-iterable operator that expands
//! each upstream element into a sub-sequence delivered downstream under the
//! granted demand.

extern crate alloc;

/// Protocol and operator modules usable in `no_std` environments.
pub mod core;
/// Standard-library integrations.
#[cfg(feature = "std")]
pub mod std;
