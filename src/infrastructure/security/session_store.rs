use crate::application::ApplicationResult;
use crate::application::ports::sessions::SessionStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Mutex-guarded map of session id to expiry. Sessions for a
/// single-admin blog fit comfortably in process memory; a restart logs
/// the admin out, which is acceptable here. The port keeps a persistent
/// store swappable.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, expires_at: DateTime<Utc>) -> ApplicationResult<String> {
        let session_id = Uuid::new_v4().to_string();
        let mut guard = self.sessions.lock().unwrap();
        guard.insert(session_id.clone(), expires_at);
        Ok(session_id)
    }

    async fn is_valid(&self, session_id: &str, now: DateTime<Utc>) -> ApplicationResult<bool> {
        let mut guard = self.sessions.lock().unwrap();
        // Checks double as garbage collection so abandoned sessions do
        // not accumulate between restarts.
        guard.retain(|_, expiry| *expiry > now);
        Ok(guard.contains_key(session_id))
    }

    async fn revoke(&self, session_id: &str) -> ApplicationResult<()> {
        let mut guard = self.sessions.lock().unwrap();
        guard.remove(session_id);
        Ok(())
    }
}
