// ============================================================================
// GoCycle Core - Authentication Service
// File: crates/gocycle-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service: credential check, session issuance and verification

use std::sync::Arc;
use tracing::{error, info, warn};

use gocycle_security::{PasswordService, SessionTokenCodec, TokenVerification};

use crate::domain::AuthUser;
use crate::error::DomainError;
use crate::repositories::CredentialStore;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Authentication service over an injected credential store and token codec
pub struct AuthService<S: CredentialStore> {
    credential_store: Arc<S>,
    token_codec: Arc<SessionTokenCodec>,
}

impl<S: CredentialStore> AuthService<S> {
    pub fn new(credential_store: Arc<S>, token_codec: Arc<SessionTokenCodec>) -> Self {
        Self {
            credential_store,
            token_codec,
        }
    }

    /// Login with username and password.
    ///
    /// Unknown usernames and wrong passwords both yield
    /// [`DomainError::InvalidCredentials`]; every other error is internal.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, DomainError> {
        // 1. Find identity
        let identity = match self.credential_store.find_by_username(username).await? {
            Some(identity) => identity,
            None => {
                warn!("Login failed: invalid credentials");
                return Err(DomainError::InvalidCredentials);
            }
        };

        // 2. Verify password (blocking task for CPU-intensive hash verification)
        let stored_hash = identity.password_hash.clone();
        let password_owned = password.to_string();

        let password_valid = tokio::task::spawn_blocking(move || {
            PasswordService::verify(&password_owned, &stored_hash)
        })
        .await
        .map_err(|e| {
            error!("Password verification task failed: {}", e);
            DomainError::InternalError(e.to_string())
        })?
        .map_err(|e| {
            error!("Password verification failed: {}", e);
            DomainError::PasswordHashError(e.to_string())
        })?;

        if !password_valid {
            warn!("Login failed: invalid credentials");
            return Err(DomainError::InvalidCredentials);
        }

        // 3. Issue session token
        let user = AuthUser::from(&identity);
        let token = self
            .token_codec
            .issue(&user.id, &user.username, user.role)
            .map_err(|e| {
                error!("Session token generation failed: {}", e);
                DomainError::TokenGenerationError(e.to_string())
            })?;

        info!("Login successful for: {}", user.username);

        Ok(LoginResult { user, token })
    }

    /// Check a session token. Invalid tokens are an answer, not an error.
    pub fn verify(&self, token: &str) -> SessionVerification {
        match self.token_codec.verify(token) {
            TokenVerification::Valid(claims) => SessionVerification::Authenticated(claims.into()),
            TokenVerification::Invalid => SessionVerification::Unauthenticated,
        }
    }
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: AuthUser,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionVerification {
    Authenticated(AuthUser),
    Unauthenticated,
}
