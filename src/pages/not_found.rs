//! Fallback for unknown paths. Not guarded.

use leptos::prelude::*;

use crate::routes::ROOT_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h2>"Page not found."</h2>
            <a href=ROOT_PATH>"Go home"</a>
        </div>
    }
}
