//! Top-level pages, one per route.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod settings;
