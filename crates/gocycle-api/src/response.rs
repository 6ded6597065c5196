//! API response bodies

use gocycle_core::AuthUser;
use serde::Serialize;

pub const LOGOUT_SUCCESSFUL: &str = "Logout successful";
pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";
pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";
pub const ADMIN_ACCESS_REQUIRED: &str = "Admin access required";
pub const NO_TOKEN_PROVIDED: &str = "No token provided";
pub const INVALID_OR_EXPIRED_TOKEN: &str = "Invalid or expired token";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// `{success, message, user?}` body shared by the auth and admin routes.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

impl AuthResponse {
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            user: None,
        }
    }

    pub fn with_user(message: &str, user: AuthUser) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            user: Some(user),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            user: None,
        }
    }
}

/// `{authenticated, user?, message?}` body of the session check.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SessionResponse {
    pub fn authenticated(user: AuthUser) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
            message: None,
        }
    }

    pub fn unauthenticated(message: &str) -> Self {
        Self {
            authenticated: false,
            user: None,
            message: Some(message.to_string()),
        }
    }
}
