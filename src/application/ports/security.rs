// src/application/ports/security.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Errors with `Unauthorized` on mismatch.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}
