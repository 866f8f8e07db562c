use serde::{Deserialize, Serialize};

use crate::models::{Artifact, Task, TaskStatus};

/// Status transition published for a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusUpdateEvent {
    pub task_id: String,
    pub context_id: String,
    pub status: TaskStatus,
    #[serde(rename = "final")]
    pub is_final: bool,
}

/// Artifact produced for a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskArtifactUpdateEvent {
    pub task_id: String,
    pub context_id: String,
    pub artifact: Artifact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_chunk: Option<bool>,
}

/// Immutable lifecycle event appended to an event sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AgentEvent {
    Task(Task),
    StatusUpdate(TaskStatusUpdateEvent),
    ArtifactUpdate(TaskArtifactUpdateEvent),
}

impl AgentEvent {
    pub fn task_id(&self) -> &str {
        match self {
            Self::Task(task) => &task.id,
            Self::StatusUpdate(update) => &update.task_id,
            Self::ArtifactUpdate(update) => &update.task_id,
        }
    }

    pub fn context_id(&self) -> &str {
        match self {
            Self::Task(task) => &task.context_id,
            Self::StatusUpdate(update) => &update.context_id,
            Self::ArtifactUpdate(update) => &update.context_id,
        }
    }

    /// Only a final status update ends an execution
    pub fn is_final(&self) -> bool {
        matches!(self, Self::StatusUpdate(update) if update.is_final)
    }

    /// Event name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Task(_) => "task",
            Self::StatusUpdate(_) => "status-update",
            Self::ArtifactUpdate(_) => "artifact-update",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;
    use crate::state_machine::TaskState;

    #[test]
    fn test_status_update_wire_format() {
        let event = AgentEvent::StatusUpdate(TaskStatusUpdateEvent {
            task_id: "t-1".to_string(),
            context_id: "c-1".to_string(),
            status: TaskStatus::new(TaskState::Completed, None),
            is_final: true,
        });
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["kind"], "status-update");
        assert_eq!(value["final"], true);
        assert_eq!(value["taskId"], "t-1");
        assert_eq!(value["status"]["state"], "completed");
        assert!(event.is_final());
    }

    #[test]
    fn test_artifact_and_task_events_are_never_final() {
        let artifact = AgentEvent::ArtifactUpdate(TaskArtifactUpdateEvent {
            task_id: "t".to_string(),
            context_id: "c".to_string(),
            artifact: Artifact::text("n", "d", "body"),
            append: None,
            last_chunk: None,
        });
        assert!(!artifact.is_final());
        assert_eq!(serde_json::to_value(&artifact).unwrap()["kind"], "artifact-update");

        let task = AgentEvent::Task(Task::from_message(&Message::user_text("x")));
        assert!(!task.is_final());
        assert_eq!(serde_json::to_value(&task).unwrap()["kind"], "task");
    }
}
