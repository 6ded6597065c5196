#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use gocycle_api::{build_router, session::SessionCookies, AppState};
use gocycle_core::repositories::StaticCredentialStore;
use gocycle_core::services::AuthService;
use gocycle_core::Identity;
use gocycle_security::{Clock, PasswordService, SessionTokenCodec};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const SECRET: &str = "router-test-secret";
pub const TTL: i64 = 7 * 24 * 60 * 60;
pub const START: i64 = 1_700_000_000;

pub const USERNAME: &str = "operator";
pub const PASSWORD: &str = "fixture-pass";
pub const SERVICE_NAME: &str = "gocycle-test";

pub struct ManualClock(AtomicI64);

impl ManualClock {
    pub fn set(&self, now: i64) {
        self.0.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct TestApp {
    pub router: Router,
    pub clock: Arc<ManualClock>,
    pub codec: Arc<SessionTokenCodec>,
}

impl TestApp {
    pub fn new() -> Self {
        let hash = PasswordService::hash_with_cost(PASSWORD, 4).unwrap();
        Self::with_password_hash(&hash)
    }

    /// App whose operator has the given stored hash, usable or not.
    pub fn with_password_hash(hash: &str) -> Self {
        let clock = Arc::new(ManualClock(AtomicI64::new(START)));
        let codec = Arc::new(SessionTokenCodec::with_clock(SECRET, TTL, clock.clone()));
        let store = Arc::new(StaticCredentialStore::new(Identity::new("op-42", USERNAME, hash)));

        let state = AppState::new(
            Arc::new(AuthService::new(store, codec.clone())),
            SessionCookies::new(false, TTL),
            SERVICE_NAME,
        );

        Self {
            router: build_router(state),
            clock,
            codec,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn login(&self, body: Value) -> Response<Body> {
        self.send(json_post("/api/auth/login", body)).await
    }

    /// Logs in with the fixture credentials and returns the session token.
    pub async fn session_token(&self) -> String {
        let response = self
            .login(serde_json::json!({"username": USERNAME, "password": PASSWORD}))
            .await;
        session_cookie_value(&response).expect("login should set the session cookie")
    }
}

pub fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_with_token(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("admin_token={}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string())
}

pub fn session_cookie_value(response: &Response<Body>) -> Option<String> {
    let cookie = set_cookie(response)?;
    let pair = cookie.split(';').next()?;
    pair.strip_prefix("admin_token=")
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub fn is_cleared(response: &Response<Body>) -> bool {
    set_cookie(response)
        .map(|c| c.starts_with("admin_token=;") && c.contains("Max-Age=0"))
        .unwrap_or(false)
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
