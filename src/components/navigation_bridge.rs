//! Carries boot-time navigation requests into the router.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::boot::NavQueue;

/// Navigates to whatever the boot sequencer queued. Renders nothing.
///
/// Must sit inside `<Router>`.
#[component]
pub fn NavigationBridge() -> impl IntoView {
    let queue = expect_context::<NavQueue>();
    let navigate = use_navigate();

    Effect::new(move || {
        queue.signal().track();
        if let Some(path) = queue.take() {
            navigate(&path, NavigateOptions::default());
        }
    });
}
