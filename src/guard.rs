//! Route access policies.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PrivateRoute` and `PublicRoute` call these on every render of their
//! route. Nothing is cached, so a session change between two renders (a
//! sign-out while a private page is open) changes the outcome of the very
//! next evaluation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{DASHBOARD_PATH, ROOT_PATH, RouteSpec};
use crate::state::auth::Session;

/// Shared UI drawn around a permitted route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chrome {
    /// App header above the page.
    Header,
    /// Page only.
    Bare,
}

/// Outcome of an access check.
#[derive(Debug)]
pub enum Access<'r, P> {
    /// Render `route` inside `chrome`, props forwarded as given.
    Render { chrome: Chrome, route: &'r RouteSpec<P> },
    /// Drop the requested route and go to `to` instead.
    Redirect { to: &'static str },
}

impl<P> Access<'_, P> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

/// Access policy for private routes.
///
/// Signed-in users get the route with the header. Everyone else goes to
/// `/`; the requested path is not remembered.
pub fn authorize<'r, P>(route: &'r RouteSpec<P>, session: &Session) -> Access<'r, P> {
    if session.is_authenticated() {
        Access::Render { chrome: Chrome::Header, route }
    } else {
        Access::Redirect { to: ROOT_PATH }
    }
}

/// Access policy for public-only routes such as the login page.
///
/// Signed-out users get the bare route; signed-in users are sent to the
/// dashboard.
pub fn admit_public<'r, P>(route: &'r RouteSpec<P>, session: &Session) -> Access<'r, P> {
    if session.is_authenticated() {
        Access::Redirect { to: DASHBOARD_PATH }
    } else {
        Access::Render { chrome: Chrome::Bare, route }
    }
}
