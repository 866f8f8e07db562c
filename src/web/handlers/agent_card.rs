use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::models::AgentCard;
use crate::web::state::AppState;

/// Agent card discovery: GET /.well-known/agent.json
pub async fn agent_card(State(state): State<Arc<AppState>>) -> Json<AgentCard> {
    Json(state.agent_card.as_ref().clone())
}
