//! Account settings.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::routes::RouteProps;
use crate::state::auth::AuthState;

const DEFAULT_SECTION: &str = "profile";

/// Section named by the `section` prop, falling back to the profile.
fn section_title(props: &RouteProps) -> String {
    let section = props.get("section").filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SECTION);
    let mut chars = section.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn SettingsPage(props: RouteProps) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let title = section_title(&props);

    view! {
        <div class="settings-page">
            <h2>{title}</h2>
            <dl class="settings-page__fields">
                <dt>"User id"</dt>
                <dd>
                    {move || auth.with(|state| state.session.user_id().map(ToString::to_string).unwrap_or_default())}
                </dd>
            </dl>
        </div>
    }
}
