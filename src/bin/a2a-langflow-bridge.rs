//! A2A Langflow Bridge Server
//!
//! Loads configuration from the environment, builds the Langflow executor and
//! serves the agent over HTTP until interrupted.

use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use langflow_bridge::config::ConfigManager;
use langflow_bridge::logging::init_structured_logging;
use langflow_bridge::models::AgentCard;
use langflow_bridge::orchestration::LangflowAgentExecutor;
use langflow_bridge::store::InMemoryTaskStore;
use langflow_bridge::web::{create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_structured_logging();

    let config = ConfigManager::load().context("failed to load configuration")?;
    info!(
        profile = %config.profile,
        langflow_url = %config.langflow.url,
        "Starting A2A Langflow bridge"
    );

    let executor = LangflowAgentExecutor::new(&config.langflow)
        .context("failed to build Langflow executor")?;
    let card = AgentCard::for_profile(config.profile, config.server.port);
    let state = AppState::from_parts(
        Arc::new(executor),
        Arc::new(InMemoryTaskStore::new()),
        card,
    );
    let app = create_app(state);

    let bind_address = config.server.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(address = %bind_address, "A2A server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .context("server error")?;

    info!("A2A server stopped");
    Ok(())
}
