//! Startup sequencing.
//!
//! SYSTEM CONTEXT
//! ==============
//! At process start the loading placeholder is mounted, then the sequencer
//! subscribes to auth events. The first event swaps the placeholder for the
//! real tree; every event syncs the session store and may navigate.
//!
//! The sequencer talks to its surroundings only through the traits below
//! and `StateContainer`, so it runs against fakes in tests.

pub mod navigation;
pub mod sequencer;

#[cfg(feature = "csr")]
pub mod browser;

use leptos::prelude::{RwSignal, Set};

pub use navigation::NavQueue;
pub use sequencer::{BootState, Effect, Sequencer, Transition};

/// What the mount point currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Placeholder shown until the first auth event.
    #[default]
    Loading,
    /// The routed application.
    App,
}

/// Mount point for the UI tree.
pub trait RenderTarget {
    /// Replace whatever is mounted with `screen`.
    fn render(&mut self, screen: Screen);
}

/// Browser history as seen by the sequencer.
pub trait Navigator {
    fn current_path(&self) -> String;

    fn navigate(&mut self, path: &str);
}

impl RenderTarget for RwSignal<Screen> {
    fn render(&mut self, screen: Screen) {
        self.set(screen);
    }
}
