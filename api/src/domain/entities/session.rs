//! Session-scoped UI state
//!
//! Replaces ambient globals (the exit-intent "shown once" flag lived in
//! session storage upstream) with an explicit context object: created when
//! a session id first appears, mutated only through these methods, dropped
//! with the session.

use std::collections::HashSet;

/// Per-session state for show-once behaviors
#[derive(Debug, Default)]
pub struct SessionContext {
    exit_intent_shown: bool,
    viewed_slugs: HashSet<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time only; the popup is never shown twice.
    pub fn mark_exit_intent_shown(&mut self) -> bool {
        if self.exit_intent_shown {
            false
        } else {
            self.exit_intent_shown = true;
            true
        }
    }

    pub fn exit_intent_shown(&self) -> bool {
        self.exit_intent_shown
    }

    /// Record a post view. Returns true if this slug was not yet viewed in
    /// this session, i.e. the view event should fire.
    pub fn mark_viewed(&mut self, slug: &str) -> bool {
        self.viewed_slugs.insert(slug.to_string())
    }

    pub fn has_viewed(&self, slug: &str) -> bool {
        self.viewed_slugs.contains(slug)
    }
}
