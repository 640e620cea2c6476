//! Session-scoped history persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::constants::session::HISTORY_KEY;
use crate::errors::PipelineError;
use crate::history::BoundedHistory;
use crate::types::SessionKey;

/// Key-value capability for per-session prediction history.
///
/// The real store lives outside this crate (a session service or a signed
/// cookie payload); the pipeline only reads and appends through this seam.
/// Only the request owning a session's credentials mutates its entry, so
/// implementations need no coordination beyond their own consistency.
pub trait SessionStore: Send + Sync {
    /// Load the history stored for `session`, or an empty one.
    fn load_history(&self, session: &str) -> Result<BoundedHistory, PipelineError>;
    /// Persist `history` as the new value for `session`.
    fn store_history(&self, session: &str, history: &BoundedHistory) -> Result<(), PipelineError>;
}

impl<T: SessionStore + ?Sized> SessionStore for std::sync::Arc<T> {
    fn load_history(&self, session: &str) -> Result<BoundedHistory, PipelineError> {
        (**self).load_history(session)
    }

    fn store_history(&self, session: &str, history: &BoundedHistory) -> Result<(), PipelineError> {
        (**self).store_history(session, history)
    }
}

/// In-process store for tests and single-process deployments.
#[derive(Default)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<SessionKey, BoundedHistory>>,
}

impl InMemorySessionStore {
    fn entry_key(session: &str) -> SessionKey {
        format!("{session}:{HISTORY_KEY}")
    }
}

impl SessionStore for InMemorySessionStore {
    fn load_history(&self, session: &str) -> Result<BoundedHistory, PipelineError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| PipelineError::SessionStore("lock poisoned".into()))?;
        Ok(guard
            .get(&Self::entry_key(session))
            .cloned()
            .unwrap_or_default())
    }

    fn store_history(&self, session: &str, history: &BoundedHistory) -> Result<(), PipelineError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| PipelineError::SessionStore("lock poisoned".into()))?;
        guard.insert(Self::entry_key(session), history.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn unknown_session_loads_empty_history() {
        let store = InMemorySessionStore::default();
        let history = store.load_history("nobody@example.com").unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn histories_round_trip_per_session() {
        let store = InMemorySessionStore::default();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();

        let mut history = BoundedHistory::default();
        history.record(61.0, now);
        store.store_history("a@example.com", &history).unwrap();

        let loaded = store.load_history("a@example.com").unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(store.load_history("b@example.com").unwrap().is_empty());
    }
}
