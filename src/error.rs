//! Crate-wide error type.
//!
//! ERROR HANDLING
//! ==============
//! None of these errors reach the UI. Config problems fall back to defaults,
//! a missing mount element falls back to `<body>`, and a failed session probe
//! simply emits no auth event, which leaves the loading placeholder up.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The embedded config blob is not valid JSON for `AppConfig`.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A config field parsed but holds an unusable value.
    #[error("invalid config field {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// No element with the configured id exists in the document.
    #[error("mount point #{id} not found")]
    MountPointMissing { id: String },

    /// The identity backend could not report the current session.
    #[error("session probe failed: {0}")]
    SessionProbe(String),
}
