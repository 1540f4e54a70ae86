//! Startup session probe against the identity backend.
//!
//! The browser build asks `session_endpoint` once who is signed in and turns
//! the answer into at most one `AuthEvent`.
//!
//! ERROR HANDLING
//! ==============
//! A probe that cannot reach a verdict emits nothing. The app then stays on
//! the loading placeholder; retrying is the backend's business.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "session_probe_test.rs"]
mod session_probe_test;

use serde::Deserialize;

use super::AuthEvent;
use crate::error::AppError;
use crate::state::auth::UserId;

/// Body shape of a successful session lookup. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct SessionUser {
    #[serde(alias = "uid")]
    id: UserId,
}

/// Turn an HTTP status and body into an auth event.
///
/// # Errors
///
/// Returns `SessionProbe` for unexpected statuses, unreadable bodies and
/// empty user ids. None of these are a verdict on the session.
pub fn interpret_response(status: u16, body: &str) -> Result<AuthEvent, AppError> {
    match status {
        200..=299 => {
            let user: SessionUser =
                serde_json::from_str(body).map_err(|e| AppError::SessionProbe(format!("bad session body: {e}")))?;
            if user.id.as_str().trim().is_empty() {
                return Err(AppError::SessionProbe("session body has an empty user id".to_owned()));
            }
            Ok(AuthEvent::SignedIn(user.id))
        }
        401 | 403 => Ok(AuthEvent::SignedOut),
        other => Err(AppError::SessionProbe(format!("unexpected status {other}"))),
    }
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn body_read_failed_message(err: &str) -> String {
    format!("could not read session body: {err}")
}

/// Ask the backend for the current session.
///
/// # Errors
///
/// Returns `SessionProbe` on transport failure or any response
/// `interpret_response` rejects.
pub async fn probe(endpoint: &str) -> Result<AuthEvent, AppError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| AppError::SessionProbe(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AppError::SessionProbe(body_read_failed_message(&e.to_string())))?;
        interpret_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(AppError::SessionProbe("not available outside the browser".to_owned()))
    }
}

/// Probe once and publish the verdict, if any, into `feed`.
pub async fn probe_and_publish(endpoint: &str, feed: &super::AuthFeed) {
    match probe(endpoint).await {
        Ok(event) => {
            if !feed.publish(event) {
                log::warn!("session probe finished after the boot sequencer stopped");
            }
        }
        Err(e) => log::warn!("{e}; staying on the loading screen"),
    }
}
