//! # GoCycle Security
//! 
//! Security utilities: session token codec and password verification.

pub mod jwt;
pub mod password;

pub use jwt::{Clock, SessionClaims, SessionTokenCodec, SystemClock, TokenVerification};
pub use password::PasswordService;
