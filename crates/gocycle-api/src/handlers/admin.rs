//! Protected admin handlers

use axum::Json;

use crate::middleware::CurrentUser;
use crate::response::AuthResponse;

/// Current admin session - GET /api/admin/session
pub async fn session(CurrentUser(user): CurrentUser) -> Json<AuthResponse> {
    Json(AuthResponse::with_user("Session active", user))
}
