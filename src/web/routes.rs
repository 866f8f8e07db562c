//! Route definitions grouped by functionality.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::web::{handlers, state::AppState};

/// Agent card discovery under both well-known paths
pub fn discovery_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/.well-known/agent.json",
            get(handlers::agent_card::agent_card),
        )
        .route(
            "/.well-known/agent-card.json",
            get(handlers::agent_card::agent_card),
        )
}

pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(handlers::health::basic_health))
}

/// JSON-RPC 2.0 endpoint
pub fn jsonrpc_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", post(handlers::jsonrpc::handle_rpc))
}
