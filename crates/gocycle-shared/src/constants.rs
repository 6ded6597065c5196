//! Application-wide constants

/// Name of the cookie carrying the admin session token.
pub const SESSION_COOKIE_NAME: &str = "admin_token";

/// Session lifetime: 7 days.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Upper bound accepted for `jwt.session_ttl_secs`: one year.
pub const MAX_SESSION_TTL_SECS: i64 = 365 * 24 * 60 * 60;

pub const DEFAULT_BCRYPT_COST: u32 = 10;

pub const DEFAULT_ADMIN_ID: &str = "admin-001";
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// bcrypt hash of `admin123`. Placeholder only, override in any real deployment.
pub const DEFAULT_ADMIN_PASSWORD_HASH: &str =
    "$2b$10$1NxNZ3yTvw4Z1S4ort28juOvE5uekbj3anzTqbka7GmEFRU8gHxyW";

/// Placeholder signing secret, override in any real deployment.
pub const DEFAULT_JWT_SECRET: &str = "gocycle-secret-key-change-in-production";

pub const PRODUCTION_ENV: &str = "production";
pub const DEVELOPMENT_ENV: &str = "development";
