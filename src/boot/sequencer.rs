//! Auth-event driven boot state machine.
//!
//! DESIGN
//! ======
//! `BootState::step` is pure: prior state, event and current path in; new
//! state and an ordered list of effects out. `Sequencer` is the thin shell
//! that reads the path, runs `step`, and applies the effects to the
//! collaborators in order.

#[cfg(test)]
#[path = "sequencer_test.rs"]
mod sequencer_test;

use futures::{Stream, StreamExt};

use super::{Navigator, RenderTarget, Screen};
use crate::auth::AuthEvent;
use crate::routes::{DASHBOARD_PATH, ROOT_PATH};
use crate::state::auth::{AuthAction, StateContainer};

/// Boot progress. Only moves from not-rendered to rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BootState {
    rendered: bool,
}

/// A side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Dispatch(AuthAction),
    /// Swap the loading placeholder for the real tree.
    RenderApp,
    Navigate(&'static str),
}

/// Result of one `step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: BootState,
    /// Always in apply order: dispatch, then render, then navigate.
    pub effects: Vec<Effect>,
}

impl BootState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the response to one auth event.
    pub fn step(self, event: &AuthEvent, current_path: &str) -> Transition {
        let mut effects = vec![Effect::Dispatch(event.action())];

        if !self.rendered {
            effects.push(Effect::RenderApp);
        }

        match event {
            AuthEvent::SignedIn(_) if current_path == ROOT_PATH => effects.push(Effect::Navigate(DASHBOARD_PATH)),
            AuthEvent::SignedIn(_) => {}
            AuthEvent::SignedOut => effects.push(Effect::Navigate(ROOT_PATH)),
        }

        Transition { state: Self { rendered: true }, effects }
    }
}

/// Applies boot transitions to the real collaborators.
pub struct Sequencer<S, N, R> {
    state: BootState,
    store: S,
    navigator: N,
    target: R,
}

impl<S, N, R> Sequencer<S, N, R>
where
    S: StateContainer,
    N: Navigator,
    R: RenderTarget,
{
    /// Build a sequencer that has not rendered yet.
    ///
    /// The caller is expected to have put the loading placeholder on
    /// `target` already.
    pub fn new(store: S, navigator: N, target: R) -> Self {
        Self { state: BootState::new(), store, navigator, target }
    }

    /// Handle one auth event completely before returning.
    pub fn handle(&mut self, event: &AuthEvent) {
        match event {
            AuthEvent::SignedIn(user_id) => {
                log::info!("auth event: signed in");
                log::debug!("signed in as {user_id}");
            }
            AuthEvent::SignedOut => log::info!("auth event: signed out"),
        }

        let current_path = self.navigator.current_path();
        let Transition { state, effects } = self.state.step(event, &current_path);
        self.state = state;

        for effect in effects {
            match effect {
                Effect::Dispatch(action) => self.store.dispatch(action),
                Effect::RenderApp => {
                    log::info!("first auth event received, rendering app");
                    self.target.render(Screen::App);
                }
                Effect::Navigate(path) => {
                    log::debug!("navigating {current_path} -> {path}");
                    self.navigator.navigate(path);
                }
            }
        }
    }

    /// Drain `events` one at a time until the stream ends.
    ///
    /// Returns the sequencer so its collaborators can be inspected.
    pub async fn run<E>(mut self, mut events: E) -> Self
    where
        E: Stream<Item = AuthEvent> + Unpin,
    {
        while let Some(event) = events.next().await {
            self.handle(&event);
        }
        log::debug!("auth event stream closed");
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn target(&self) -> &R {
        &self.target
    }
}
