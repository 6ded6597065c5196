use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::{admin, auth, health};
use crate::middleware::{require_admin, require_auth};
use crate::state::AppState;

/// Routes without CORS or tracing; the server binary adds those layers.
pub fn build_router(state: AppState) -> Router {
    // Public routes
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/verify", get(auth::verify_session));

    // Protected routes - authentication first, then the admin role
    let admin_routes = Router::new()
        .route("/session", get(admin::session))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/auth", auth_routes)
        .nest("/api/admin", admin_routes)
        .with_state(state)
}
