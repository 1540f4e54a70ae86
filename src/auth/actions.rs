//! User-initiated sign-in and sign-out.
//!
//! Neither action touches the session store directly. Sign-in leaves the app
//! for the backend's login flow; sign-out publishes `SignedOut` so the boot
//! sequencer does the dispatch and the redirect, the same as any other event.

use super::AuthFeed;
use crate::config::AppConfig;

/// Send the browser to the identity backend's login flow.
pub fn sign_in(config: &AppConfig) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&config.login_url);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}

/// End the backend session, then report `SignedOut`.
///
/// A failed logout request leaves the session as it is.
pub fn sign_out(config: &AppConfig, feed: &AuthFeed) {
    #[cfg(feature = "csr")]
    {
        let endpoint = config.logout_endpoint.clone();
        let feed = feed.clone();
        leptos::task::spawn_local(async move {
            match gloo_net::http::Request::post(&endpoint).send().await {
                Ok(resp) if resp.ok() => {
                    feed.signed_out();
                }
                Ok(resp) => log::warn!("logout failed: status {}", resp.status()),
                Err(e) => log::warn!("logout failed: {e}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, feed);
    }
}
