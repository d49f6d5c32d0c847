//! In-memory session store
//!
//! Sessions exist only to back show-once behaviors (view-event dedup, the
//! exit-intent popup) and the per-session listing request guard. The map is
//! keyed by the client-supplied session id; there is nothing durable here.
//! Entries idle past `SESSION_TTL` are dropped by a periodic sweep, so a
//! client rotating session ids cannot grow the map without bound.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::app::LatestOnly;
use crate::domain::entities::SessionContext;

/// Idle time after which a session is discarded
pub const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// How often the background sweep runs
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Everything the server keeps for one session
#[derive(Default)]
pub struct SessionEntry {
    /// Show-once flags; locked asynchronously because callers hold it
    /// across repository and analytics awaits
    pub context: Mutex<SessionContext>,
    /// Stale-response guard for listing fetches from this session
    pub listing_guard: LatestOnly,
}

struct Stored {
    entry: Arc<SessionEntry>,
    last_seen: Instant,
}

/// Shared store of per-session state.
///
/// The lock is held only to look up, insert or sweep entries, so slow work
/// on one session never blocks another.
pub struct SessionStore {
    inner: RwLock<HashMap<String, Stored>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(SESSION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Fetch the entry for a session id, creating it on first sight and
    /// refreshing its idle timer
    pub fn session(&self, id: &str) -> Arc<SessionEntry> {
        let mut map = self.inner.write().expect("session store lock poisoned");
        let stored = map.entry(id.to_string()).or_insert_with(|| Stored {
            entry: Arc::default(),
            last_seen: Instant::now(),
        });
        stored.last_seen = Instant::now();
        stored.entry.clone()
    }

    /// Drop every session idle longer than the TTL; returns how many went
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut map = self.inner.write().expect("session store lock poisoned");
        let before = map.len();
        map.retain(|_, stored| now.duration_since(stored.last_seen) < self.ttl);
        before - map.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.read().expect("session store lock poisoned").len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_id_returns_same_entry() {
        let store = SessionStore::new();
        {
            let entry = store.session("abc");
            entry.context.lock().await.mark_viewed("first-post");
        }
        let entry = store.session("abc");
        assert!(entry.context.lock().await.has_viewed("first-post"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new();
        store
            .session("a")
            .context
            .lock()
            .await
            .mark_viewed("first-post");
        assert!(!store
            .session("b")
            .context
            .lock()
            .await
            .has_viewed("first-post"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn listing_guards_are_per_session() {
        let store = SessionStore::new();
        let token = store.session("a").listing_guard.issue();
        // A fetch from another session must not supersede this one.
        store.session("b").listing_guard.issue();
        assert!(store.session("a").listing_guard.is_latest(token));
    }

    #[tokio::test(start_paused = true)]
    async fn rotating_session_ids_do_not_accumulate() {
        let store = SessionStore::with_ttl(Duration::from_secs(60));
        for i in 0..10_000 {
            store.session(&format!("rotated-{}", i));
        }
        assert_eq!(store.len(), 10_000);

        tokio::time::advance(Duration::from_secs(61)).await;
        assert_eq!(store.sweep(), 10_000);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn recently_seen_sessions_survive_a_sweep() {
        let store = SessionStore::with_ttl(Duration::from_secs(60));
        store.session("idle");
        store
            .session("active")
            .context
            .lock()
            .await
            .mark_viewed("first-post");

        tokio::time::advance(Duration::from_secs(45)).await;
        // Any request on a session refreshes its idle timer.
        store.session("active");
        tokio::time::advance(Duration::from_secs(30)).await;

        assert_eq!(store.sweep(), 1);
        assert_eq!(store.len(), 1);
        assert!(store
            .session("active")
            .context
            .lock()
            .await
            .has_viewed("first-post"));
    }
}
