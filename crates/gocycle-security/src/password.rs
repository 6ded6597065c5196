//! Password hashing and verification (bcrypt, with argon2 accepted on verify)

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use gocycle_shared::constants::DEFAULT_BCRYPT_COST;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
    #[error("Unsupported hash format")]
    UnsupportedHash,
}

/// Algorithm a stored hash was produced with, detected from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    Bcrypt,
    Argon2,
}

impl HashScheme {
    pub fn detect(hash: &str) -> Option<Self> {
        if hash.starts_with("$2a$") || hash.starts_with("$2b$") || hash.starts_with("$2y$") {
            Some(HashScheme::Bcrypt)
        } else if hash.starts_with("$argon2") {
            Some(HashScheme::Argon2)
        } else {
            None
        }
    }
}

pub struct PasswordService;

impl PasswordService {
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        Self::hash_with_cost(password, DEFAULT_BCRYPT_COST)
    }

    pub fn hash_with_cost(password: &str, cost: u32) -> Result<String, PasswordError> {
        bcrypt::hash(password, cost).map_err(|e| PasswordError::HashError(e.to_string()))
    }

    /// `Ok(false)` is a wrong password; `Err` means the stored hash itself is unusable.
    pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
        match HashScheme::detect(hash) {
            Some(HashScheme::Bcrypt) => {
                bcrypt::verify(password, hash).map_err(|e| PasswordError::HashError(e.to_string()))
            }
            Some(HashScheme::Argon2) => {
                let parsed_hash = PasswordHash::new(hash)
                    .map_err(|e| PasswordError::HashError(e.to_string()))?;
                Ok(Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok())
            }
            None => Err(PasswordError::UnsupportedHash),
        }
    }
}
