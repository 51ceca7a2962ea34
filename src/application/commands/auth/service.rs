// src/application/commands/auth/service.rs
use std::sync::Arc;
use std::time::Duration;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{security::PasswordHasher, sessions::SessionStore, time::Clock},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// The single-admin credential gate. One identity, configured at boot;
/// a successful login mints a server-side session whose id travels in
/// the cookie.
pub struct AuthService {
    admin_email: String,
    admin_password_hash: String,
    hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(
        admin_email: String,
        admin_password_hash: String,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            admin_email,
            admin_password_hash,
            hasher,
            sessions,
            clock,
            session_ttl,
        }
    }

    /// Verify the submitted credentials and open a session. The same
    /// error comes back for an unknown email and a bad password.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<String> {
        if !command.email.trim().eq_ignore_ascii_case(&self.admin_email) {
            tracing::warn!("login attempt with unknown email");
            return Err(ApplicationError::unauthorized("invalid email or password"));
        }

        self.hasher
            .verify(&command.password, &self.admin_password_hash)
            .await
            .map_err(|_| {
                tracing::warn!("login attempt with wrong password");
                ApplicationError::unauthorized("invalid email or password")
            })?;

        let now = self.clock.now();
        let expires_at = now
            + chrono::Duration::from_std(self.session_ttl)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let session_id = self.sessions.create(expires_at).await?;
        tracing::info!("admin logged in");
        Ok(session_id)
    }

    pub async fn logout(&self, session_id: &str) -> ApplicationResult<()> {
        self.sessions.revoke(session_id).await?;
        tracing::info!("admin logged out");
        Ok(())
    }

    pub async fn session_valid(&self, session_id: &str) -> ApplicationResult<bool> {
        self.sessions.is_valid(session_id, self.clock.now()).await
    }
}
