//! Shared header drawn above every private page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows who is signed in, links between private pages and the logout
//! button. Logout goes through the auth channel like any other session
//! change.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::{dashboard_route, settings_route};
use crate::auth::{AuthFeed, actions};
use crate::config::AppConfig;
use crate::routes::DASHBOARD_PATH;
use crate::state::auth::AuthState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<AppConfig>();
    let feed = expect_context::<AuthFeed>();
    let pathname = use_location().pathname;

    let user_label = move || {
        auth.with(|state| {
            state
                .session
                .user_id()
                .map(ToString::to_string)
                .unwrap_or_default()
        })
    };

    let links = [("Dashboard", dashboard_route()), ("Settings", settings_route())]
        .into_iter()
        .map(|(label, route)| {
            let href = route.path;
            let class = move || {
                if route.matches(&pathname.get()) {
                    "header__link header__link--active"
                } else {
                    "header__link"
                }
            };
            view! { <a href=href class=class>{label}</a> }
        })
        .collect::<Vec<_>>();

    let title = config.title.clone();
    let on_logout = move |_| actions::sign_out(&config, &feed);

    view! {
        <header class="header">
            <a href=DASHBOARD_PATH class="header__title">
                <h1>{title}</h1>
            </a>
            <nav class="header__nav">{links}</nav>
            <span class="header__spacer"></span>
            <span class="header__user">{user_label}</span>
            <button class="btn header__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}

