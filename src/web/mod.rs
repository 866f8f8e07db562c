//! # Web API Module
//!
//! HTTP surface of the bridge: agent card discovery, a liveness probe and the
//! JSON-RPC endpoint that carries A2A requests to the [`DefaultRequestHandler`].
//!
//! [`DefaultRequestHandler`]: crate::orchestration::DefaultRequestHandler

use axum::Router;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Create the web application with all routes and middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::discovery_routes())
        .merge(routes::health_routes())
        .merge(routes::jsonrpc_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    info!("Web application created with all routes and middleware");
    app
}
