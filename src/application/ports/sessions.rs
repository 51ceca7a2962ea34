// src/application/ports/sessions.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Server-side session records for the single admin identity. The store
/// owns expiry; callers only hand over the cookie value.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a session expiring at `expires_at`, returning its opaque id.
    async fn create(&self, expires_at: DateTime<Utc>) -> ApplicationResult<String>;

    /// Whether the session exists and has not expired as of `now`.
    async fn is_valid(&self, session_id: &str, now: DateTime<Utc>) -> ApplicationResult<bool>;

    async fn revoke(&self, session_id: &str) -> ApplicationResult<()>;
}
