//! Root components and the route table.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::boot::Screen;
use crate::components::guarded_route::{PrivateRoute, PublicRoute};
use crate::components::loading::LoadingPlaceholder;
use crate::components::navigation_bridge::NavigationBridge;
use crate::config::{AppConfig, DEFAULT_TITLE};
use crate::pages::{dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, settings::SettingsPage};
use crate::routes::{DASHBOARD_PATH, ROOT_PATH, RouteProps, RouteSpec, SETTINGS_PATH};

pub fn login_route() -> RouteSpec {
    RouteSpec::new(ROOT_PATH, |_: RouteProps| view! { <LoginPage/> }.into_any())
}

pub fn dashboard_route() -> RouteSpec {
    RouteSpec::new(DASHBOARD_PATH, |props: RouteProps| view! { <DashboardPage props/> }.into_any())
}

pub fn settings_route() -> RouteSpec {
    RouteSpec::new(SETTINGS_PATH, |props: RouteProps| view! { <SettingsPage props/> }.into_any())
        .props(RouteProps::default().with("section", "profile"))
}

/// Whatever the mount point shows: the loading placeholder until the boot
/// sequencer renders the app.
#[component]
pub fn Root(screen: RwSignal<Screen>) -> impl IntoView {
    move || match screen.get() {
        Screen::Loading => view! { <LoadingPlaceholder/> }.into_any(),
        Screen::App => view! { <App/> }.into_any(),
    }
}

/// The routed application.
///
/// Expects the session signal, nav queue, auth feed and config in context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let title = use_context::<AppConfig>().map_or_else(|| DEFAULT_TITLE.to_owned(), |c| c.title);

    view! {
        <Title text=title/>

        <Router>
            <NavigationBridge/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <PublicRoute route=login_route()/> }/>
                    <Route path=StaticSegment("dashboard") view=|| view! { <PrivateRoute route=dashboard_route()/> }/>
                    <Route path=StaticSegment("settings") view=|| view! { <PrivateRoute route=settings_route()/> }/>
                </Routes>
            </main>
        </Router>
    }
}
