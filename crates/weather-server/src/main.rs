//! Weather Record Server
//!
//! Accepts weather lookups, forwards them to Weatherstack, and keeps the
//! combined results in memory for retrieval by identifier.

mod error;
mod handlers;
mod services;
mod settings;
mod storage;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use services::{RecordService, WeatherstackProvider};
use settings::Settings;
use storage::MemoryStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub records: Arc<RecordService>,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Weather Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    info!("Loading configuration...");
    let settings = Settings::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, provider={}, cors_origin={}",
        settings.bind_address, settings.provider_url, settings.cors_origin
    );

    let provider = Arc::new(
        WeatherstackProvider::from_settings(&settings)
            .context("Failed to initialize weather provider")?,
    );
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        records: Arc::new(RecordService::new(store, provider)),
    };

    let app = router(state).layer(cors_layer(settings.cors_origin_header()?));

    let addr = settings.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/weather", post(handlers::weather::create))
        .route("/weather/:id", get(handlers::weather::get))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Single trusted front-end origin, credentials allowed
fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
