//! Single-identity credential store backed by configuration

use async_trait::async_trait;
use gocycle_shared::config::AdminSettings;

use crate::domain::Identity;
use crate::error::DomainError;
use crate::repositories::CredentialStore;

pub struct StaticCredentialStore {
    identity: Identity,
}

impl StaticCredentialStore {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn from_settings(settings: &AdminSettings) -> Self {
        Self::new(Identity::from(settings))
    }
}

#[async_trait]
impl CredentialStore for StaticCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, DomainError> {
        if username == self.identity.username {
            Ok(Some(self.identity.clone()))
        } else {
            Ok(None)
        }
    }
}
