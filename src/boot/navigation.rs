//! Hand-off between the sequencer and the router.
//!
//! The sequencer runs outside the router, so it cannot call `use_navigate`.
//! It leaves the target path in a `NavQueue`; `NavigationBridge`, mounted
//! inside the router, picks it up and navigates.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::{GetUntracked, RwSignal, Set, UpdateUntracked};

/// Latest navigation request not yet carried out by the router.
#[derive(Clone, Copy, Debug)]
pub struct NavQueue(RwSignal<Option<String>>);

impl NavQueue {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    /// Ask the router to go to `path`. A newer request replaces an older one.
    pub fn request(&self, path: &str) {
        self.0.set(Some(path.to_owned()));
    }

    /// Path requested but not yet taken, without subscribing.
    pub fn pending(&self) -> Option<String> {
        self.0.get_untracked()
    }

    /// Remove and return the pending request without notifying subscribers.
    pub fn take(&self) -> Option<String> {
        self.0.try_update_untracked(Option::take).flatten()
    }

    /// Underlying signal, for tracking reads inside effects.
    pub fn signal(&self) -> RwSignal<Option<String>> {
        self.0
    }
}

impl Default for NavQueue {
    fn default() -> Self {
        Self::new()
    }
}
