//! Browser wiring for the boot sequence.
//!
//! `launch` mounts the loading placeholder synchronously, then starts the
//! sequencer on the auth channel, then kicks off the session probe that
//! feeds it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::navigation::NavQueue;
use super::{Navigator, Screen, Sequencer};
use crate::app::Root;
use crate::auth::{self, session_probe};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::routes::ROOT_PATH;
use crate::state::auth::AuthState;

/// `Navigator` backed by `window.location` and the router bridge.
pub struct BrowserNavigator {
    queue: NavQueue,
}

impl BrowserNavigator {
    pub fn new(queue: NavQueue) -> Self {
        Self { queue }
    }
}

impl Navigator for BrowserNavigator {
    /// A request the router has not carried out yet counts as the current
    /// path; otherwise the address bar is authoritative.
    fn current_path(&self) -> String {
        self.queue
            .pending()
            .or_else(|| web_sys::window().and_then(|w| w.location().pathname().ok()))
            .unwrap_or_else(|| ROOT_PATH.to_owned())
    }

    fn navigate(&mut self, path: &str) {
        self.queue.request(path);
    }
}

/// Boot the app into the page.
pub fn launch(config: AppConfig) {
    let auth = RwSignal::new(AuthState::default());
    let screen = RwSignal::new(Screen::Loading);
    let nav = NavQueue::new();
    let (feed, events) = auth::channel();

    let parent = match mount_element(&config.mount_id) {
        Ok(el) => el,
        Err(e) => {
            leptos::logging::warn!("{e}; mounting into <body>");
            let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
                leptos::logging::error!("document has no <body>; nothing to mount into");
                return;
            };
            body
        }
    };

    let mount_config = config.clone();
    let mount_feed = feed.clone();
    leptos::mount::mount_to(parent, move || {
        provide_context(auth);
        provide_context(nav);
        provide_context(mount_feed);
        provide_context(mount_config);
        view! { <Root screen/> }
    })
    .forget();

    let sequencer = Sequencer::new(auth, BrowserNavigator::new(nav), screen);
    leptos::task::spawn_local(async move {
        sequencer.run(events).await;
    });

    leptos::task::spawn_local(async move {
        session_probe::probe_and_publish(&config.session_endpoint, &feed).await;
    });
}

fn mount_element(id: &str) -> Result<web_sys::HtmlElement, AppError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| AppError::MountPointMissing { id: id.to_owned() })
}
