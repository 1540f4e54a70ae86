//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session is the only global state. It is created by the boot
//! sequence, provided to the tree as an `RwSignal`, written only through
//! `StateContainer::dispatch` and read everywhere else.

pub mod auth;
