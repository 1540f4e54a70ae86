//! Client configuration embedded in the host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host HTML carries a `<meta name="blogpad-config" content="{...}">`
//! tag. Every field is optional; anything missing takes the default below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::AppError;

pub const CONFIG_META_NAME: &str = "blogpad-config";

pub const DEFAULT_MOUNT_ID: &str = "app";
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";
pub const DEFAULT_SESSION_ENDPOINT: &str = "/api/auth/me";
pub const DEFAULT_LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const DEFAULT_LOGIN_URL: &str = "/auth/login";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TITLE: &str = "Blogpad";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Id of the element the UI tree is mounted into.
    pub mount_id: String,
    /// Placeholder shown until the first auth event arrives.
    pub loading_text: String,
    /// Probed once at startup to learn the current session.
    pub session_endpoint: String,
    /// POSTed when the user signs out.
    pub logout_endpoint: String,
    /// Browser redirect target for sign-in.
    pub login_url: String,
    pub log_level: String,
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_owned(),
            loading_text: DEFAULT_LOADING_TEXT.to_owned(),
            session_endpoint: DEFAULT_SESSION_ENDPOINT.to_owned(),
            logout_endpoint: DEFAULT_LOGOUT_ENDPOINT.to_owned(),
            login_url: DEFAULT_LOGIN_URL.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON config blob.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed JSON or unknown keys, and
    /// `InvalidConfig` when a field holds an unusable value.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| AppError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.mount_id.trim().is_empty() {
            return Err(AppError::InvalidConfig { field: "mount_id", reason: "must not be empty".to_owned() });
        }
        check_endpoint("session_endpoint", &self.session_endpoint)?;
        check_endpoint("logout_endpoint", &self.logout_endpoint)?;
        check_endpoint("login_url", &self.login_url)?;
        self.log_level()?;
        Ok(())
    }

    /// Parsed `log_level`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for anything other than
    /// `error|warn|info|debug|trace` (case-insensitive).
    pub fn log_level(&self) -> Result<log::Level, AppError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| AppError::InvalidConfig {
                field: "log_level",
                reason: format!("unknown level {:?}", self.log_level),
            })
    }

    /// Load config from the host page's meta tag.
    ///
    /// Missing tag means defaults. A broken tag is logged and also yields
    /// defaults so the app still boots.
    #[cfg(feature = "csr")]
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{CONFIG_META_NAME}\"]")).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        match raw {
            None => Self::default(),
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                leptos::logging::warn!("{e}; using default config");
                Self::default()
            }),
        }
    }
}

fn check_endpoint(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.starts_with('/') || value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(AppError::InvalidConfig {
            field,
            reason: format!("{value:?} is neither an absolute path nor an http(s) URL"),
        })
    }
}
