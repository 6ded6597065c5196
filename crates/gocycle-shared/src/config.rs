//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_ADMIN_ID, DEFAULT_ADMIN_PASSWORD_HASH, DEFAULT_ADMIN_USERNAME, DEFAULT_JWT_SECRET,
    DEFAULT_SESSION_TTL_SECS, DEVELOPMENT_ENV, MAX_SESSION_TTL_SECS, PRODUCTION_ENV,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub admin: AdminSettings,
    pub jwt: JwtSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Dashboard origin allowed to call the API with credentials.
    pub cors_origin: String,
}

/// The single operator identity.
#[derive(Deserialize, Clone)]
pub struct AdminSettings {
    pub id: String,
    pub username: String,
    pub password_hash: String,
}

impl std::fmt::Debug for AdminSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSettings")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub session_ttl_secs: i64,
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"<redacted>")
            .field("session_ttl_secs", &self.session_ttl_secs)
            .finish()
    }
}

impl AppConfig {
    /// Load from defaults, `config/default`, `config/{env}`, then the
    /// environment (`ADMIN__USERNAME`, `JWT__SECRET`, ...). The flat variable
    /// names used by earlier deployments (`ADMIN_USERNAME`,
    /// `ADMIN_PASSWORD_HASH`, `JWT_SECRET`, `NODE_ENV`) win over everything.
    pub fn load() -> Result<Self, AppError> {
        let env = Self::deployment_env(|key| std::env::var(key).ok());
        let builder = Self::builder_with_defaults(&env)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .set_override_option("admin.username", std::env::var("ADMIN_USERNAME").ok())?
            .set_override_option("admin.password_hash", std::env::var("ADMIN_PASSWORD_HASH").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("app.env", Some(env))?;
        Self::from_builder(builder)
    }

    /// Deployment mode, taken from the first of `NODE_ENV`, `APP__ENV` and
    /// `APP_ENV` that is set. The same value selects the `config/{env}` file
    /// and drives `app.env`, so the two can never disagree.
    fn deployment_env(lookup: impl Fn(&str) -> Option<String>) -> String {
        ["NODE_ENV", "APP__ENV", "APP_ENV"]
            .into_iter()
            .find_map(|key| lookup(key).filter(|value| !value.is_empty()))
            .unwrap_or_else(|| DEVELOPMENT_ENV.to_string())
    }

    /// Built-in defaults only, ignoring files and the environment.
    pub fn with_defaults(env: &str) -> Result<Self, AppError> {
        Self::from_builder(Self::builder_with_defaults(env)?)
    }

    fn builder_with_defaults(env: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "gocycle-server")?
            .set_default("app.cors_origin", "http://localhost:3000")?
            .set_default("admin.id", DEFAULT_ADMIN_ID)?
            .set_default("admin.username", DEFAULT_ADMIN_USERNAME)?
            .set_default("admin.password_hash", DEFAULT_ADMIN_PASSWORD_HASH)?
            .set_default("jwt.secret", DEFAULT_JWT_SECRET)?
            .set_default("jwt.session_ttl_secs", DEFAULT_SESSION_TTL_SECS)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.admin.username.is_empty() {
            return Err(AppError::InvalidConfig("admin.username must not be empty".into()));
        }
        if self.admin.password_hash.is_empty() {
            return Err(AppError::InvalidConfig("admin.password_hash must not be empty".into()));
        }
        if self.jwt.secret.is_empty() {
            return Err(AppError::InvalidConfig("jwt.secret must not be empty".into()));
        }
        if self.jwt.session_ttl_secs <= 0 || self.jwt.session_ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(AppError::InvalidConfig(format!(
                "jwt.session_ttl_secs must be between 1 and {}",
                MAX_SESSION_TTL_SECS
            )));
        }
        Ok(())
    }

    /// Controls the `Secure` attribute of the session cookie.
    pub fn is_production(&self) -> bool {
        self.app.env == PRODUCTION_ENV
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt.secret == DEFAULT_JWT_SECRET
    }

    pub fn uses_default_password_hash(&self) -> bool {
        self.admin.password_hash == DEFAULT_ADMIN_PASSWORD_HASH
    }
}
