//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guarded route wrappers and the header read the session from context;
//! nothing here writes it.

pub mod guarded_route;
pub mod header;
pub mod loading;
pub mod navigation_bridge;
