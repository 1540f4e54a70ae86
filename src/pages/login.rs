//! Login page, the public entry point at `/`.

use leptos::prelude::*;

use crate::auth::actions;
use crate::config::AppConfig;

/// Sign-in button that hands off to the identity backend.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let title = config.title.clone();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{title}</h1>
                <p class="login-card__subtitle">"Write it down before it gets away."</p>
                <button class="login-button" on:click=move |_| actions::sign_in(&config)>
                    "Sign in"
                </button>
            </div>
        </div>
    }
}
