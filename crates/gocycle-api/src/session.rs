//! Session cookie transport

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use gocycle_shared::config::AppConfig;
use gocycle_shared::constants::SESSION_COOKIE_NAME;
use time::Duration;

/// Reads, sets, and clears the `admin_token` cookie.
#[derive(Debug, Clone)]
pub struct SessionCookies {
    secure: bool,
    max_age_secs: i64,
}

impl SessionCookies {
    pub fn new(secure: bool, max_age_secs: i64) -> Self {
        Self {
            secure,
            max_age_secs,
        }
    }

    /// `Secure` only in production; lifetime follows the token TTL.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.is_production(), config.jwt.session_ttl_secs)
    }

    pub fn token(&self, jar: &CookieJar) -> Option<String> {
        jar.get(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }

    pub fn set(&self, jar: CookieJar, token: String) -> CookieJar {
        jar.add(self.cookie(token))
    }

    /// Always emits a removal cookie, whether or not the request carried one.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        let mut cookie = self.cookie(String::new());
        cookie.make_removal();
        jar.add(cookie)
    }

    fn cookie(&self, value: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, value))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Strict)
            .path("/")
            .max_age(Duration::seconds(self.max_age_secs))
            .build()
    }
}
