use std::sync::Arc;

use gocycle_core::repositories::StaticCredentialStore;
use gocycle_core::services::AuthService;
use gocycle_security::SessionTokenCodec;
use gocycle_shared::config::AppConfig;

use crate::session::SessionCookies;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<StaticCredentialStore>>,
    pub session_cookies: SessionCookies,
    /// Reported by the health endpoint.
    pub service_name: String,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService<StaticCredentialStore>>,
        session_cookies: SessionCookies,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            auth_service,
            session_cookies,
            service_name: service_name.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let credential_store = Arc::new(StaticCredentialStore::from_settings(&config.admin));
        let token_codec = Arc::new(SessionTokenCodec::new(
            &config.jwt.secret,
            config.jwt.session_ttl_secs,
        ));

        Self::new(
            Arc::new(AuthService::new(credential_store, token_codec)),
            SessionCookies::from_config(config),
            config.app.name.clone(),
        )
    }
}
