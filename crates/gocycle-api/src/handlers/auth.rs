// ============================================================================
// GoCycle API - Auth Handlers
// File: crates/gocycle-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (login, logout, session check)

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use gocycle_core::services::{SessionVerification, LOGIN_SUCCESS_MESSAGE};
use serde::Deserialize;

use crate::error::ApiError;
use crate::response::{
    AuthResponse, SessionResponse, CREDENTIALS_REQUIRED, INVALID_OR_EXPIRED_TOKEN,
    LOGOUT_SUCCESSFUL, NO_TOKEN_PROVIDED,
};
use crate::state::AppState;

/// Login request payload. Both fields are optional at the JSON level so a
/// missing field is reported as a validation error rather than a parse error.
#[derive(Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some((username, password))
            }
            _ => None,
        }
    }
}

/// Login handler - POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let payload = payload.map(|Json(payload)| payload).unwrap_or_default();

    // Validate input
    let (username, password) = payload
        .credentials()
        .ok_or_else(|| ApiError::BadRequest(CREDENTIALS_REQUIRED.to_string()))?;

    let result = state.auth_service.login(username, password).await?;

    let jar = state.session_cookies.set(jar, result.token);
    Ok((jar, Json(AuthResponse::with_user(LOGIN_SUCCESS_MESSAGE, result.user))))
}

/// Logout handler - POST /api/auth/logout
///
/// Only clears the cookie. The token itself stays valid until it expires.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<AuthResponse>) {
    (
        state.session_cookies.clear(jar),
        Json(AuthResponse::success(LOGOUT_SUCCESSFUL)),
    )
}

/// Session check handler - GET /api/auth/verify
pub async fn verify_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (StatusCode, CookieJar, Json<SessionResponse>) {
    let Some(token) = state.session_cookies.token(&jar) else {
        return (
            StatusCode::UNAUTHORIZED,
            jar,
            Json(SessionResponse::unauthenticated(NO_TOKEN_PROVIDED)),
        );
    };

    match state.auth_service.verify(&token) {
        SessionVerification::Authenticated(user) => {
            (StatusCode::OK, jar, Json(SessionResponse::authenticated(user)))
        }
        SessionVerification::Unauthenticated => (
            StatusCode::UNAUTHORIZED,
            state.session_cookies.clear(jar),
            Json(SessionResponse::unauthenticated(INVALID_OR_EXPIRED_TOKEN)),
        ),
    }
}
