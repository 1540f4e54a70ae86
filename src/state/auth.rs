//! Session state and its reducer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The boot sequencer is the single writer: it turns identity backend events
//! into `AuthAction`s. Route guards and user-aware views only read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use leptos::prelude::{GetUntracked, RwSignal, Update};
use serde::{Deserialize, Serialize};

/// Opaque identifier the identity backend assigns to a user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether anyone is signed in. The user id exists only when someone is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    Authenticated { user_id: UserId },
    #[default]
    Unauthenticated,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::Authenticated { user_id } => Some(user_id),
            Self::Unauthenticated => None,
        }
    }
}

/// Actions accepted by the session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login(UserId),
    Logout,
}

/// Global auth state held by the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
}

impl AuthState {
    /// Apply one action. Every action fully determines the resulting session.
    pub fn reduce(&mut self, action: AuthAction) {
        self.session = match action {
            AuthAction::Login(user_id) => Session::Authenticated { user_id },
            AuthAction::Logout => Session::Unauthenticated,
        };
    }
}

/// Selector used by guards and views.
pub fn is_authenticated(state: &AuthState) -> bool {
    state.session.is_authenticated()
}

/// The global state container as seen by the boot sequencer.
pub trait StateContainer {
    /// Apply `action`; the new state is readable as soon as this returns.
    fn dispatch(&mut self, action: AuthAction);

    fn snapshot(&self) -> AuthState;
}

impl StateContainer for RwSignal<AuthState> {
    fn dispatch(&mut self, action: AuthAction) {
        self.update(|state| state.reduce(action));
    }

    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }
}
