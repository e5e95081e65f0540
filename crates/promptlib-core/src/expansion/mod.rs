//! Sidebar expand/collapse state
//!
//! The state is seeded from the ancestors of the current location plus
//! whatever the user persisted last time, with the location winning. Moving
//! to a new location forces its ancestors open; nothing is ever collapsed
//! automatically. Only user toggles are written back to storage.

mod state;
pub mod storage;

use std::collections::BTreeSet;

pub use state::ExpansionState;
pub use storage::{FileStorage, MemoryStorage, StateStorage};

use crate::config::SiteConfig;

/// Storage key holding the serialized state
pub const STATE_KEY: &str = "sidebar-state";

/// Cumulative path prefixes of the location below `prefix`.
///
/// `/base/prompts/a/b/c` with prefix `/base/prompts/` yields
/// `{"a", "a/b", "a/b/c"}`. Locations outside the prefix yield nothing.
pub fn compute_active_paths(prefix: &str, current_path: &str) -> BTreeSet<String> {
    let location = current_path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let Some(rest) = location.strip_prefix(prefix) else {
        return BTreeSet::new();
    };

    let mut active = BTreeSet::new();
    let mut current = String::new();
    for segment in rest.split('/').filter(|s| !s.is_empty()) {
        if !current.is_empty() {
            current.push('/');
        }
        current.push_str(segment);
        active.insert(current.clone());
    }
    active
}

/// Owns the persisted side of the expansion state and computes transitions
#[derive(Debug)]
pub struct ExpansionStore<S> {
    storage: S,
    prefix: String,
}

impl<S: StateStorage> ExpansionStore<S> {
    pub fn new(storage: S, prefix: impl Into<String>) -> Self {
        ExpansionStore {
            storage,
            prefix: prefix.into(),
        }
    }

    /// Store whose active-path prefix is the site's `<base>/prompts/`
    pub fn for_site(storage: S, config: &SiteConfig) -> Self {
        Self::new(storage, config.prompts_prefix())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn compute_active_paths(&self, current_path: &str) -> BTreeSet<String> {
        compute_active_paths(&self.prefix, current_path)
    }

    /// The persisted state, or `None` when absent, unreadable or malformed
    pub fn load_persisted(&self) -> Option<ExpansionState> {
        let raw = match self.storage.read(STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted sidebar state");
                return None;
            }
        };

        match ExpansionState::from_json(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed persisted sidebar state");
                None
            }
        }
    }

    /// Initial state for a page load at `current_path`
    pub fn initialize(&self, current_path: &str) -> ExpansionState {
        let active = self.compute_active_paths(current_path);
        match self.load_persisted() {
            Some(persisted) => persisted.with_all_expanded(&active),
            None => ExpansionState::from_active(&active),
        }
    }

    /// Force the ancestors of a new location open.
    ///
    /// Returns `prev` itself when nothing changed.
    pub fn on_navigate(&self, prev: &ExpansionState, current_path: &str) -> ExpansionState {
        let active = self.compute_active_paths(current_path);
        prev.with_all_expanded(&active)
    }

    /// Apply a user toggle and persist the full resulting state.
    ///
    /// A failed write is logged; the returned state reflects the toggle either way.
    pub fn on_toggle(&mut self, prev: &ExpansionState, path: &str, is_open: bool) -> ExpansionState {
        let next = prev.with(path, is_open);
        if let Err(e) = self.persist(&next) {
            tracing::warn!(error = %e, path, "failed to persist sidebar state");
        }
        next
    }

    /// Overwrite the persisted state
    pub fn persist(&mut self, state: &ExpansionState) -> crate::error::Result<()> {
        let json = state.to_json()?;
        self.storage.write(STATE_KEY, &json)?;
        tracing::debug!(entries = state.len(), "persisted_sidebar_state");
        Ok(())
    }

    /// Forget the persisted state
    pub fn clear(&mut self) -> crate::error::Result<()> {
        self.storage.remove(STATE_KEY)
    }
}
