//! # HTTP Server
//!
//! Combines the listing routes with CORS and request tracing and serves
//! them over a `TcpListener`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::EmissionRepository;

use super::config::HttpServerConfig;
use super::routes::{api_routes, root_routes, AppState};

/// HTTP server for the emissions listing API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(repo: Arc<dyn EmissionRepository>) -> Self {
        Self::with_config(HttpServerConfig::default(), repo)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, repo: Arc<dyn EmissionRepository>) -> Self {
        let router = Self::build_router(&config, repo);
        Self { config, router }
    }

    /// Build the router with all endpoints and middleware
    fn build_router(config: &HttpServerConfig, repo: Arc<dyn EmissionRepository>) -> Router {
        let state = Arc::new(AppState::new(repo));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(root_routes())
            .nest("/api", api_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        tracing::info!("emissions API listening on {}", addr);
        tracing::info!("list endpoint: http://{}/api/emissions/", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
