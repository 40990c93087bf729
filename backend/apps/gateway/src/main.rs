//! Gateway Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors use the
//! unified `kernel::error::AppError` wire encoding.

use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use bridge::{BridgeConfig, EngineClient, bridge_router};
use daypass::{DaypassConfig, DaypassMiddlewareState, daypass_router, require_daily_session};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "gateway=info,daypass=info,bridge=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let daypass_config = load_daypass_config()?;
    let bridge_config = load_bridge_config()?;

    tracing::info!(
        runtime = %bridge_config.runtime.display(),
        script = %bridge_config.script.display(),
        timeout_ms = bridge_config.timeout_ms(),
        max_concurrency = bridge_config.max_concurrency,
        "Engine bridge configured"
    );

    let engine = EngineClient::new(Arc::new(bridge_config));

    // Protected routes: everything behind the daily-session middleware
    let middleware_state = DaypassMiddlewareState {
        config: daypass_config.clone(),
    };
    let protected = bridge_router(engine).route_layer(axum::middleware::from_fn(
        move |req, next| {
            let state = middleware_state.clone();
            async move { require_daily_session(state, req, next).await }
        },
    ));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .nest("/auth", daypass_router(daypass_config))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(4000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// Load auth configuration from the environment
///
/// Release builds refuse to start without both secrets; debug builds
/// fall back to a random signing key and a disabled verification
/// endpoint, never to a fixed guessable default.
fn load_daypass_config() -> anyhow::Result<Arc<DaypassConfig>> {
    let shared_secret = env::var("BOT_SHARED_SECRET").ok().filter(|s| !s.is_empty());
    let signing_secret = env::var("TOKEN_SIGNING_SECRET")
        .ok()
        .filter(|s| !s.is_empty());

    let mut config = if cfg!(debug_assertions) {
        if signing_secret.is_none() {
            tracing::warn!(
                "TOKEN_SIGNING_SECRET unset, using a random development key; \
                 issued sessions will not survive a restart"
            );
        }
        if shared_secret.is_none() {
            tracing::warn!("BOT_SHARED_SECRET unset, /auth/verify is disabled");
        }
        DaypassConfig::development()
    } else {
        anyhow::ensure!(
            shared_secret.is_some(),
            "BOT_SHARED_SECRET must be set in production"
        );
        anyhow::ensure!(
            signing_secret.is_some(),
            "TOKEN_SIGNING_SECRET must be set in production"
        );
        DaypassConfig::default()
    };

    if let Some(secret) = &signing_secret {
        config.signing_key = DaypassConfig::signing_key_from_secret(secret);
    }
    config.shared_secret = shared_secret;

    Ok(Arc::new(config))
}

/// Load engine bridge configuration from the environment
fn load_bridge_config() -> anyhow::Result<BridgeConfig> {
    let app_root = match env::var("APP_ROOT") {
        Ok(root) => PathBuf::from(root),
        Err(_) => env::current_dir()?,
    };

    let script = env::var("RAG_RUNNER")
        .map(PathBuf::from)
        .unwrap_or_else(|_| app_root.join("backend").join("scripts").join("rag_runner.py"));

    let timeout_secs: u64 = env::var("ENGINE_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(120);

    let max_concurrency: usize = env::var("ENGINE_MAX_CONCURRENCY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(4);

    Ok(BridgeConfig {
        runtime: PathBuf::from(env::var("PYTHON_BIN").unwrap_or_else(|_| "python3".to_string())),
        script,
        app_root,
        timeout: Duration::from_secs(timeout_secs),
        max_concurrency,
    })
}
