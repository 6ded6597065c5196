use axum::http::{header, HeaderValue, Method};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{error, info, warn};

use gocycle_api::{build_router, AppState};
use gocycle_security::password::{HashScheme, PasswordService};
use gocycle_shared::config::AppConfig;

#[derive(Parser)]
#[command(name = "gocycle-server", version, about = "GoCycle admin authentication server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print a bcrypt hash suitable for ADMIN_PASSWORD_HASH
    HashPassword {
        #[arg(env = "GOCYCLE_PASSWORD")]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::HashPassword { password } => {
            println!("{}", PasswordService::hash(&password)?);
            Ok(())
        }
    }
}

async fn serve() -> anyhow::Result<()> {
    // Initialize telemetry
    gocycle_shared::telemetry::init_telemetry();

    info!("GoCycle server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    warn_about_placeholders(&config);

    let state = AppState::from_config(&config);

    let cors_origin: HeaderValue = config.app.cors_origin.parse()?;
    let app = build_router(state)
        // CORS (credentials are required for the session cookie)
        .layer(
            CorsLayer::new()
                .allow_origin(cors_origin)
                .allow_credentials(true)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()));

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {} (env: {})", addr, config.app.env);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The built-in credentials are placeholders; say so loudly but keep running.
fn warn_about_placeholders(config: &AppConfig) {
    if config.uses_default_secret() {
        warn!("jwt.secret is the built-in default; set JWT_SECRET before deploying");
    }
    if config.uses_default_password_hash() {
        warn!("admin.password_hash is the built-in default; set ADMIN_PASSWORD_HASH before deploying");
    }
    if HashScheme::detect(&config.admin.password_hash).is_none() {
        error!("admin.password_hash is not a bcrypt or argon2 hash; every login will fail");
    }
}
