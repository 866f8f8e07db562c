use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::message::{Message, Part};
use crate::events::AgentEvent;
use crate::state_machine::TaskState;

/// Current status of a task, optionally with an agent message explaining it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    pub state: TaskState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl TaskStatus {
    /// Status stamped with the current time
    pub fn new(state: TaskState, message: Option<Message>) -> Self {
        Self {
            state,
            message,
            timestamp: Some(Utc::now().to_rfc3339()),
        }
    }
}

/// Result object produced by a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parts: Vec<Part>,
}

impl Artifact {
    /// Build a named artifact with a single text part
    pub fn text(
        name: impl Into<String>,
        description: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            artifact_id: Uuid::new_v4().to_string(),
            name: Some(name.into()),
            description: Some(description.into()),
            parts: vec![Part::text(text)],
        }
    }
}

/// Unit of work tracked through the lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub context_id: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Task {
    /// Create a `submitted` task for an inbound message
    ///
    /// Ids carried by the message are kept; missing ones are generated.
    pub fn from_message(message: &Message) -> Self {
        let id = message
            .task_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let context_id = message
            .context_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut first = message.clone();
        first.task_id = Some(id.clone());
        first.context_id = Some(context_id.clone());

        Self {
            id,
            context_id,
            status: TaskStatus::new(TaskState::Submitted, None),
            artifacts: Vec::new(),
            history: vec![first],
            metadata: None,
        }
    }

    /// Fold a lifecycle event into this task record
    pub fn apply_event(&mut self, event: &AgentEvent) {
        match event {
            AgentEvent::Task(task) => *self = task.clone(),
            AgentEvent::StatusUpdate(update) => {
                if let Some(previous) = self.status.message.take() {
                    self.history.push(previous);
                }
                self.status = update.status.clone();
            }
            AgentEvent::ArtifactUpdate(update) => {
                let existing = self
                    .artifacts
                    .iter_mut()
                    .find(|a| a.artifact_id == update.artifact.artifact_id);
                match (existing, update.append.unwrap_or(false)) {
                    (Some(artifact), true) => {
                        artifact.parts.extend(update.artifact.parts.iter().cloned())
                    }
                    (Some(artifact), false) => *artifact = update.artifact.clone(),
                    (None, _) => self.artifacts.push(update.artifact.clone()),
                }
            }
        }
    }

    /// Copy of this task with history limited to the most recent entries
    pub fn with_history_limit(&self, limit: Option<usize>) -> Self {
        let mut task = self.clone();
        if let Some(limit) = limit {
            let skip = task.history.len().saturating_sub(limit);
            task.history.drain(..skip);
        }
        task
    }
}
