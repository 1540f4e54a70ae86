//! Dashboard, the landing page after sign-in.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::routes::{RouteProps, SETTINGS_PATH};
use crate::state::auth::{AuthState, UserId};

fn greeting(user_id: Option<&UserId>) -> String {
    match user_id {
        Some(id) => format!("Welcome back, {id}."),
        None => "Welcome.".to_owned(),
    }
}

#[component]
pub fn DashboardPage(props: RouteProps) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = props.get("notice").map(str::to_owned);

    view! {
        <div class="dashboard-page">
            <h2>{move || auth.with(|state| greeting(state.session.user_id()))}</h2>
            {notice.map(|text| view! { <p class="dashboard-page__notice">{text}</p> })}
            <a href=SETTINGS_PATH class="btn">"Settings"</a>
        </div>
    }
}
