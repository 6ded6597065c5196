//! Session token handling (HS256 JWT)

use std::sync::Arc;

use chrono::Utc;
use gocycle_shared::constants::DEFAULT_SESSION_TTL_SECS;
use gocycle_shared::Role;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Session lifetime of {0}s does not fit a token expiry")]
    ExpiryOverflow(i64),
}

/// Payload carried by a session token. Decoding fails when any field is
/// missing or the role is not one we know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Outcome of [`SessionTokenCodec::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenVerification {
    Valid(SessionClaims),
    Invalid,
}

/// Source of the current unix time, in seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Issues and verifies signed, time-limited session tokens.
pub struct SessionTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
    clock: Arc<dyn Clock>,
}

impl SessionTokenCodec {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self::with_clock(secret, ttl_secs, Arc::new(SystemClock))
    }

    pub fn with_default_ttl(secret: &str) -> Self {
        Self::new(secret, DEFAULT_SESSION_TTL_SECS)
    }

    pub fn with_clock(secret: &str, ttl_secs: i64, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against `clock` in `verify`.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
            clock,
        }
    }

    pub fn issue(&self, id: &str, username: &str, role: Role) -> Result<String, TokenError> {
        let iat = self.clock.now();
        let exp = iat
            .checked_add(self.ttl_secs)
            .ok_or(TokenError::ExpiryOverflow(self.ttl_secs))?;
        let claims = SessionClaims {
            id: id.to_string(),
            username: username.to_string(),
            role,
            iat,
            exp,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::CreationError(e.to_string()))
    }

    /// Never fails: malformed, forged, or expired tokens are all `Invalid`.
    pub fn verify(&self, token: &str) -> TokenVerification {
        let claims = match decode::<SessionClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                debug!("Session token rejected: {}", e);
                return TokenVerification::Invalid;
            }
        };

        if self.clock.now() >= claims.exp {
            debug!("Session token expired at {}", claims.exp);
            return TokenVerification::Invalid;
        }

        TokenVerification::Valid(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    const SECRET: &str = "test-secret";
    const TTL: i64 = 7 * 24 * 60 * 60;

    struct ManualClock(AtomicI64);

    impl ManualClock {
        fn at(now: i64) -> Arc<Self> {
            Arc::new(Self(AtomicI64::new(now)))
        }

        fn set(&self, now: i64) {
            self.0.store(now, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn codec_at(now: i64) -> (SessionTokenCodec, Arc<ManualClock>) {
        let clock = ManualClock::at(now);
        (SessionTokenCodec::with_clock(SECRET, TTL, clock.clone()), clock)
    }

    #[test]
    fn test_issue_then_verify() {
        let (codec, _) = codec_at(1_700_000_000);
        let token = codec.issue("admin-001", "admin", Role::Admin).unwrap();

        match codec.verify(&token) {
            TokenVerification::Valid(claims) => {
                assert_eq!(claims.id, "admin-001");
                assert_eq!(claims.username, "admin");
                assert_eq!(claims.role, Role::Admin);
                assert_eq!(claims.iat, 1_700_000_000);
                assert_eq!(claims.exp, 1_700_000_000 + TTL);
            }
            TokenVerification::Invalid => panic!("Expected a valid token"),
        }
    }

    #[test]
    fn test_token_expires() {
        let (codec, clock) = codec_at(1_700_000_000);
        let token = codec.issue("admin-001", "admin", Role::Admin).unwrap();

        clock.set(1_700_000_000 + TTL - 1);
        assert!(matches!(codec.verify(&token), TokenVerification::Valid(_)));

        clock.set(1_700_000_000 + TTL);
        assert_eq!(codec.verify(&token), TokenVerification::Invalid);

        clock.set(1_700_000_000 + TTL + 3600);
        assert_eq!(codec.verify(&token), TokenVerification::Invalid);
    }

    #[test]
    fn test_issued_at_is_embedded() {
        let (codec, clock) = codec_at(1_700_000_000);
        let first = codec.issue("admin-001", "admin", Role::Admin).unwrap();
        clock.set(1_700_000_001);
        let second = codec.issue("admin-001", "admin", Role::Admin).unwrap();

        assert_ne!(first, second);
        assert!(matches!(codec.verify(&first), TokenVerification::Valid(_)));
        assert!(matches!(codec.verify(&second), TokenVerification::Valid(_)));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let (codec, _) = codec_at(1_700_000_000);
        let token = codec.issue("admin-001", "admin", Role::Admin).unwrap();

        for i in 0..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();
            assert_eq!(
                codec.verify(&tampered),
                TokenVerification::Invalid,
                "byte {} was flipped but the token still verified",
                i
            );
        }
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let (codec, clock) = codec_at(1_700_000_000);
        let other = SessionTokenCodec::with_clock("other-secret", TTL, clock);
        let token = other.issue("admin-001", "admin", Role::Admin).unwrap();

        assert_eq!(codec.verify(&token), TokenVerification::Invalid);
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let (codec, _) = codec_at(1_700_000_000);

        for token in ["", "not-a-token", "a.b.c", "...", "eyJhbGciOiJIUzI1NiJ9"] {
            assert_eq!(codec.verify(token), TokenVerification::Invalid);
        }
    }

    #[test]
    fn test_claims_shape_is_enforced() {
        let (codec, _) = codec_at(1_700_000_000);
        let key = EncodingKey::from_secret(SECRET.as_bytes());
        let header = Header::new(Algorithm::HS256);

        let unknown_role = serde_json::json!({
            "id": "admin-001",
            "username": "admin",
            "role": "editor",
            "iat": 1_700_000_000_i64,
            "exp": 1_700_000_000_i64 + TTL,
        });
        let token = encode(&header, &unknown_role, &key).unwrap();
        assert_eq!(codec.verify(&token), TokenVerification::Invalid);

        let missing_username = serde_json::json!({
            "id": "admin-001",
            "role": "admin",
            "iat": 1_700_000_000_i64,
            "exp": 1_700_000_000_i64 + TTL,
        });
        let token = encode(&header, &missing_username, &key).unwrap();
        assert_eq!(codec.verify(&token), TokenVerification::Invalid);
    }

    #[test]
    fn test_default_ttl_is_seven_days() {
        let codec = SessionTokenCodec::with_default_ttl(SECRET);
        let token = codec.issue("admin-001", "admin", Role::Admin).unwrap();

        match codec.verify(&token) {
            TokenVerification::Valid(claims) => assert_eq!(claims.exp - claims.iat, 604_800),
            TokenVerification::Invalid => panic!("Expected a valid token"),
        }
    }

    #[test]
    fn test_oversized_lifetime_is_a_creation_error() {
        let codec = SessionTokenCodec::new(SECRET, i64::MAX);
        assert!(matches!(
            codec.issue("admin-001", "admin", Role::Admin),
            Err(TokenError::ExpiryOverflow(i64::MAX))
        ));
    }
}
