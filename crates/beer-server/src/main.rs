//! Beer Catalogue Server
//!
//! Serves beers and their reviews over HTTP. The storage backend (in-memory
//! or SQLite) is chosen from configuration at startup and injected into the
//! handlers through `AppState`.

mod handlers;
mod seed;
mod settings;
mod storage;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use beer_core::CatalogStorage;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use settings::ServerConfig;
use storage::StorageType;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn CatalogStorage>,
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

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[FATAL] Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Beer Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> Result<()> {
    info!(
        "Config loaded: bind={}, storage={}, db={}",
        config.bind_address,
        config.storage,
        config.database_path.display()
    );

    let storage_type: StorageType = config
        .storage
        .parse()
        .context("Failed to select storage backend")?;
    let storage = storage::open_storage(storage_type, &config.database_path).await?;
    info!("Storage ready: {}", storage.backend_name());

    if config.seed_sample_data {
        seed::populate(storage.as_ref())
            .await
            .context("Failed to load sample data")?;
    }

    let app = router(AppState { storage });

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("The beer server is on tap at {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/beers",
            get(handlers::beers::list).post(handlers::beers::create),
        )
        .route("/beers/:id", get(handlers::beers::get))
        .route(
            "/beers/:id/reviews",
            get(handlers::reviews::list).post(handlers::reviews::create),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
