//! Credential store trait (port)

use async_trait::async_trait;
use crate::domain::Identity;
use crate::error::DomainError;

/// Lookup of operator identities by username. Read-only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, DomainError>;
}
