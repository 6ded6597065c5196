// ============================================================================
// GoCycle API - Access Control Middleware
// File: crates/gocycle-api/src/middleware.rs
// ============================================================================
//! Session authentication and role authorization for protected routes

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use gocycle_core::services::SessionVerification;
use gocycle_core::{AuthUser, Role};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::response::{ADMIN_ACCESS_REQUIRED, AUTHENTICATION_REQUIRED, INVALID_OR_EXPIRED_TOKEN};
use crate::state::AppState;

/// Authentication gate: requires a valid session cookie and attaches the
/// decoded [`AuthUser`] to the request. A rejected token also clears the cookie.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, (CookieJar, ApiError)> {
    let Some(token) = state.session_cookies.token(&jar) else {
        return Err((jar, ApiError::Unauthorized(AUTHENTICATION_REQUIRED.to_string())));
    };

    match state.auth_service.verify(&token) {
        SessionVerification::Authenticated(user) => {
            debug!("Authenticated request for: {}", user.username);
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        SessionVerification::Unauthenticated => Err((
            state.session_cookies.clear(jar),
            ApiError::Unauthorized(INVALID_OR_EXPIRED_TOKEN.to_string()),
        )),
    }
}

/// Authorization gate for admin-only routes. Must run after [`require_auth`].
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    require_role(Role::Admin, request, next).await
}

pub async fn require_role(required: Role, request: Request, next: Next) -> Result<Response, ApiError> {
    let role = request.extensions().get::<AuthUser>().map(|user| user.role);

    match role {
        Some(role) if role == required => Ok(next.run(request).await),
        Some(role) => {
            warn!("Role {} denied, {} required", role, required);
            Err(ApiError::Forbidden(ADMIN_ACCESS_REQUIRED.to_string()))
        }
        None => {
            warn!("Role check ran without an authenticated session");
            Err(ApiError::Forbidden(ADMIN_ACCESS_REQUIRED.to_string()))
        }
    }
}

/// Extractor for the user attached by [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError::Unauthorized(AUTHENTICATION_REQUIRED.to_string()))
    }
}
