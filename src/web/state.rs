//! # Web API Application State
//!
//! Shared state handed to every handler: the request handler that drives task
//! execution and the agent card served for discovery.

use std::sync::Arc;

use crate::models::AgentCard;
use crate::orchestration::{AgentExecutor, DefaultRequestHandler};
use crate::store::TaskStore;

#[derive(Clone)]
pub struct AppState {
    pub handler: DefaultRequestHandler,
    pub agent_card: Arc<AgentCard>,
}

impl AppState {
    pub fn new(handler: DefaultRequestHandler, agent_card: AgentCard) -> Self {
        Self {
            handler,
            agent_card: Arc::new(agent_card),
        }
    }

    /// Wire an executor and task store into a ready-to-serve state
    pub fn from_parts(
        executor: Arc<dyn AgentExecutor>,
        store: Arc<dyn TaskStore>,
        agent_card: AgentCard,
    ) -> Arc<Self> {
        Arc::new(Self::new(
            DefaultRequestHandler::new(executor, store),
            agent_card,
        ))
    }
}
