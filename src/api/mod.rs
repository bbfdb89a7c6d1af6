//! HTTP layer around the simulation engine.
//!
//! Accepts a (partial) simulation configuration as JSON, runs it, and relays
//! the result verbatim. Optionally serves the browser UI from a directory.

mod error;
mod rest;
mod types;

pub use error::{ApiError, ApiResult};
pub use rest::router;
pub use types::*;

use crate::config::ServerConfig;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the complete API server: REST routes, `/metrics`, and the static UI
pub fn create_api_server(config: &ServerConfig) -> Router {
    // The UI may be hosted on another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = router().route("/metrics", crate::metrics::metrics_route());

    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors).layer(TraceLayer::new_for_http())
}
