//! Typed route descriptions and the app's fixed paths.
//!
//! DESIGN
//! ======
//! A `RouteSpec` names the options the guards care about (`path`, `exact`,
//! the component) and carries a `RouteProps` bag the guards never look
//! inside. Its shape belongs to the destination page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::BTreeMap;

use leptos::prelude::AnyView;

/// Public entry point; also where signed-out users end up.
pub const ROOT_PATH: &str = "/";
/// Landing page after sign-in.
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const SETTINGS_PATH: &str = "/settings";

/// Pass-through properties for a destination page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteProps(BTreeMap<String, String>);

impl RouteProps {
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// A navigable destination plus the component it renders.
#[derive(Clone, Debug)]
pub struct RouteSpec<P = RouteProps> {
    pub path: &'static str,
    pub exact: bool,
    pub component: fn(P) -> AnyView,
    pub props: P,
}

impl<P: Default> RouteSpec<P> {
    /// Exact route with empty props.
    pub fn new(path: &'static str, component: fn(P) -> AnyView) -> Self {
        Self { path, exact: true, component, props: P::default() }
    }
}

impl<P> RouteSpec<P> {
    #[must_use]
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    #[must_use]
    pub fn props(mut self, props: P) -> Self {
        self.props = props;
        self
    }

    /// Whether `path` addresses this route.
    ///
    /// Exact routes compare whole paths, ignoring one trailing slash.
    /// Non-exact routes also match anything below them on a segment
    /// boundary, so `/post` covers `/post/7` but not `/posts`.
    pub fn matches(&self, path: &str) -> bool {
        let own = trim_trailing_slash(self.path);
        let path = trim_trailing_slash(path);
        if own == path {
            return true;
        }
        if self.exact {
            return false;
        }
        if own == "/" {
            return true;
        }
        path.strip_prefix(own).is_some_and(|rest| rest.starts_with('/'))
    }
}

impl<P: Clone> RouteSpec<P> {
    /// Build the destination view with its props forwarded unchanged.
    pub fn render(&self) -> AnyView {
        (self.component)(self.props.clone())
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path }
}
