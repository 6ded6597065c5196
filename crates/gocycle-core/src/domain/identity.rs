// ============================================================================
// GoCycle Core - Identity Entity
// File: crates/gocycle-core/src/domain/identity.rs
// Description: Configured operator identity and its public projection
// ============================================================================

use gocycle_security::SessionClaims;
use gocycle_shared::config::AdminSettings;
use gocycle_shared::Role;
use serde::{Deserialize, Serialize};

/// Operator identity. Built once from configuration and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

impl Identity {
    pub fn new(id: impl Into<String>, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            password_hash: password_hash.into(),
            role: Role::Admin,
        }
    }
}

impl From<&AdminSettings> for Identity {
    fn from(settings: &AdminSettings) -> Self {
        Identity::new(
            settings.id.clone(),
            settings.username.clone(),
            settings.password_hash.clone(),
        )
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Public user shape returned by the API and attached to authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl From<&Identity> for AuthUser {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            username: identity.username.clone(),
            role: identity.role,
        }
    }
}

impl From<SessionClaims> for AuthUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
            role: claims.role,
        }
    }
}
