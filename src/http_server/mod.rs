//! # HTTP Server Module
//!
//! Axum server exposing the emissions listing endpoint and a root liveness
//! check.

mod config;
mod errors;
mod routes;
mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use routes::{api_routes, root_routes, AppState};
pub use server::HttpServer;
