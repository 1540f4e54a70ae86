//! Identity backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity backend is a black box that reports sign-in and sign-out.
//! Everything it says arrives as an `AuthEvent` on one channel, which the
//! boot sequencer drains in order.

pub mod actions;
pub mod events;
pub mod session_probe;

pub use events::{AuthEvent, AuthEvents, AuthFeed, channel};
