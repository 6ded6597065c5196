//! Domain services (business logic)

pub mod auth_service;

pub use auth_service::{AuthService, LoginResult, SessionVerification, LOGIN_SUCCESS_MESSAGE};
