//! Placeholder mounted before the first auth event.

use leptos::prelude::*;

use crate::config::{AppConfig, DEFAULT_LOADING_TEXT};

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    let text = use_context::<AppConfig>().map_or_else(|| DEFAULT_LOADING_TEXT.to_owned(), |c| c.loading_text);
    view! { <p class="loading">{text}</p> }
}
