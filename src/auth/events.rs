//! Auth event type and the channel that carries it.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use futures::channel::mpsc;

use crate::state::auth::{AuthAction, UserId};

/// A session change reported by the identity backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(UserId),
    SignedOut,
}

impl AuthEvent {
    /// Store action that brings the session in line with this event.
    pub fn action(&self) -> AuthAction {
        match self {
            Self::SignedIn(user_id) => AuthAction::Login(user_id.clone()),
            Self::SignedOut => AuthAction::Logout,
        }
    }
}

/// Receiving half, consumed by the boot sequencer.
pub type AuthEvents = mpsc::UnboundedReceiver<AuthEvent>;

/// Sending half, held by anything that learns about session changes.
#[derive(Clone, Debug)]
pub struct AuthFeed {
    tx: mpsc::UnboundedSender<AuthEvent>,
}

impl AuthFeed {
    /// Queue an event for the sequencer.
    ///
    /// Returns `false` if the sequencer is gone.
    pub fn publish(&self, event: AuthEvent) -> bool {
        self.tx.unbounded_send(event).is_ok()
    }

    pub fn signed_in(&self, user_id: UserId) -> bool {
        self.publish(AuthEvent::SignedIn(user_id))
    }

    pub fn signed_out(&self) -> bool {
        self.publish(AuthEvent::SignedOut)
    }
}

/// Create a connected feed/events pair.
pub fn channel() -> (AuthFeed, AuthEvents) {
    let (tx, rx) = mpsc::unbounded();
    (AuthFeed { tx }, rx)
}
