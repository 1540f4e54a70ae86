//! Route wrappers that apply the access policies.
//!
//! Both wrappers re-run their policy whenever the session signal changes,
//! so signing out while a private page is open redirects right away.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::header::Header;
use crate::guard::{self, Access, Chrome};
use crate::routes::{RouteProps, RouteSpec};
use crate::state::auth::AuthState;

/// Renders `route` for signed-in users, redirects everyone else to `/`.
#[component]
pub fn PrivateRoute(route: RouteSpec) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    move || {
        let session = auth.with(|state| state.session.clone());
        view_access(guard::authorize(&route, &session))
    }
}

/// Renders `route` for signed-out users, sends signed-in users to the
/// dashboard.
#[component]
pub fn PublicRoute(route: RouteSpec) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    move || {
        let session = auth.with(|state| state.session.clone());
        view_access(guard::admit_public(&route, &session))
    }
}

fn view_access(access: Access<'_, RouteProps>) -> AnyView {
    match access {
        Access::Render { chrome: Chrome::Header, route } => view! {
            <Header/>
            {route.render()}
        }
        .into_any(),
        Access::Render { chrome: Chrome::Bare, route } => route.render(),
        Access::Redirect { to } => view! { <Redirect path=to/> }.into_any(),
    }
}
