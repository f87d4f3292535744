//! HTTP server for the public widget.
//!
//! Routes:
//! - `GET /embed` widget page with the height reporter
//! - `GET /embed.js` host embed script
//! - `GET /api/disruptions/active`
//! - `GET /api/widget-settings`
//! - `GET /health`

pub mod handlers;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared, read-only state for the request handlers.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/embed", get(handlers::embed_page))
        .route("/embed.js", get(handlers::embed_script))
        .route("/api/disruptions/active", get(handlers::active_disruptions))
        .route("/api/widget-settings", get(handlers::widget_settings))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("safesailing=info,tower_http=info,warn"));

    // a second call (tests, embedding) keeps the existing subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

pub async fn start_server(config: Config) -> AppResult<()> {
    init_tracing();

    let addr = config.bind_address();
    let state = ServerState {
        config: Arc::new(config),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("failed to bind {addr}: {e}")))?;

    tracing::info!("Widget server listening on http://{addr}");
    println!("🌊 Serving the SafeSailing widget on http://{addr} (Ctrl+C to stop)");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .map_err(|e| AppError::Server(format!("server error: {e}")))?;

    tracing::info!("Widget server stopped");
    Ok(())
}
