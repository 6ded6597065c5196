//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Unknown username and wrong password share this variant and message.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Credential store error: {0}")]
    StoreError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// True for faults that are not the caller's doing.
    pub fn is_internal(&self) -> bool {
        !matches!(self, DomainError::InvalidCredentials)
    }
}
