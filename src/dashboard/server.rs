//! Dashboard HTTP Server
//!
//! Axum-based server with embedded static files, CORS, and graceful shutdown.

use crate::dashboard::api::{api_router, DashboardApiState};
use crate::dashboard::config::DashboardConfig;
use crate::skills::SkillStore;
use axum::{
    extract::Path,
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use rust_embed::Embed;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Embedded static files for the dashboard
#[derive(Embed)]
#[folder = "src/dashboard/static/"]
struct StaticAssets;

/// Dashboard server
pub struct DashboardServer {
    config: DashboardConfig,
    state: DashboardApiState,
}

impl DashboardServer {
    /// Create a dashboard server over a loaded catalog
    pub fn new(config: DashboardConfig, store: Arc<SkillStore>) -> Self {
        Self {
            config,
            state: DashboardApiState::new(store),
        }
    }

    /// Build the router with all routes and middleware
    pub fn build_router(&self) -> Router {
        // The API is read-only, so GET is the only method ever allowed
        let cors = if self.config.cors_enabled {
            CorsLayer::new()
                .allow_origin(
                    self.config
                        .cors_origins
                        .iter()
                        .filter_map(|o| o.parse().ok())
                        .collect::<Vec<_>>(),
                )
                .allow_methods([Method::GET])
                .allow_headers([header::CONTENT_TYPE])
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers([header::CONTENT_TYPE])
        };

        let mut router = Router::new()
            .route("/", get(index_handler))
            .route("/{*path}", get(static_handler))
            .nest("/api", api_router(self.state.clone()))
            .layer(cors);

        if self.config.log_requests {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Start the server and run until shutdown signal
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.socket_addr();
        let router = self.build_router();

        info!(
            "Starting dashboard server on {} ({} skills)",
            addr,
            self.state.skills.store.len()
        );

        if !self.config.is_localhost() {
            warn!("Dashboard bound to {} - reachable from the network", addr);
        }

        info!("Dashboard available at {}", self.config.base_url());

        let listener = tokio::net::TcpListener::bind(addr).await?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Dashboard server shut down gracefully");
        Ok(())
    }
}

/// Serve the index.html file
async fn index_handler() -> impl IntoResponse {
    match StaticAssets::get("index.html") {
        Some(content) => Html(content.data.into_owned()).into_response(),
        None => Html(FALLBACK_INDEX).into_response(),
    }
}

/// Serve static files from embedded assets
async fn static_handler(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    if path.contains("..") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream().to_string();
            (
                [
                    (header::CONTENT_TYPE, mime),
                    (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
                ],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Fallback index page when no static files are embedded
const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Skillboard</title>
</head>
<body>
    <h1>Skillboard</h1>
    <p>The dashboard UI is not installed. The JSON API is available:</p>
    <ul>
        <li><a href="/api/skills">/api/skills</a></li>
        <li><a href="/api/categories">/api/categories</a></li>
        <li><a href="/api/trends">/api/trends</a></li>
        <li><a href="/api/overview">/api/overview</a></li>
        <li><a href="/api/health">/api/health</a></li>
    </ul>
</body>
</html>"#;
