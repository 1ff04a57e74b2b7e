//! In-memory session store.

use booksmith_core::{Session, SessionInput};
use booksmith_error::{BooksmithResult, SessionError, SessionErrorKind};
use booksmith_interface::SessionStore;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Process-local session store backed by a mutexed map.
///
/// Read and replace both hold the lock for the whole operation, which gives
/// the per-key read-modify-write atomicity the orchestrator relies on. An
/// external store may be substituted through the [`SessionStore`] trait as
/// long as it provides the same guarantee.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently held.
    pub fn len(&self) -> usize {
        self.sessions.lock().map(|map| map.len()).unwrap_or(0)
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of all stored sessions, in no particular order.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions
            .lock()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self, input: SessionInput) -> BooksmithResult<Session> {
        let session = Session::new(input);
        let mut sessions = self.sessions.lock().map_err(|e| {
            SessionError::new(SessionErrorKind::StorePoisoned(e.to_string()))
        })?;
        debug!(id = %session.id, "Created design session");
        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    fn get(&self, id: &str) -> BooksmithResult<Option<Session>> {
        let sessions = self.sessions.lock().map_err(|e| {
            SessionError::new(SessionErrorKind::StorePoisoned(e.to_string()))
        })?;
        Ok(sessions.get(id).cloned())
    }

    fn replace(&self, mut session: Session) -> BooksmithResult<Option<Session>> {
        let mut sessions = self.sessions.lock().map_err(|e| {
            SessionError::new(SessionErrorKind::StorePoisoned(e.to_string()))
        })?;
        if !sessions.contains_key(&session.id) {
            debug!(id = %session.id, "Replace against unknown session id");
            return Ok(None);
        }
        session.updated_at = Utc::now();
        sessions.insert(session.id.clone(), session.clone());
        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booksmith_core::{DesignOptions, SessionStatus};

    fn input() -> SessionInput {
        SessionInput {
            activities: vec![],
            photos: vec![],
            options: DesignOptions::default(),
        }
    }

    #[test]
    fn test_create_then_get() {
        let store = InMemorySessionStore::new();
        assert!(store.is_empty());
        let session = store.create(input()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.session_ids(), vec![session.id.clone()]);
        let fetched = store.get(&session.id).unwrap().unwrap();
        assert_eq!(fetched.id, session.id);
        assert_eq!(fetched.status, SessionStatus::Pending);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = InMemorySessionStore::new();
        assert!(store.get("no-such-session").unwrap().is_none());
    }

    #[test]
    fn test_replace_refreshes_updated_at() {
        let store = InMemorySessionStore::new();
        let mut session = store.create(input()).unwrap();
        let before = session.updated_at;
        session.status = SessionStatus::ArtDirector;
        let replaced = store.replace(session).unwrap().unwrap();
        assert!(replaced.updated_at >= before);
        let fetched = store.get(&replaced.id).unwrap().unwrap();
        assert_eq!(fetched.status, SessionStatus::ArtDirector);
    }

    #[test]
    fn test_replace_unknown_id_is_none() {
        let store = InMemorySessionStore::new();
        let mut session = Session::new(input());
        session.id = "vanished".to_string();
        assert!(store.replace(session).unwrap().is_none());
    }
}
