use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Sender of a protocol message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// Content part of a message or artifact, tagged by `kind` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Part {
    Text { text: String },
    Data { data: Value },
    File { file: Value },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// A single conversational turn exchanged between caller and agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub role: Role,
    pub parts: Vec<Part>,
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Message {
    /// Build an agent message with a single text part bound to a task
    pub fn agent_text(
        text: impl Into<String>,
        context_id: impl Into<String>,
        task_id: impl Into<String>,
    ) -> Self {
        Self {
            role: Role::Agent,
            parts: vec![Part::text(text)],
            message_id: Uuid::new_v4().to_string(),
            context_id: Some(context_id.into()),
            task_id: Some(task_id.into()),
            metadata: None,
        }
    }

    /// Build a user message with a single text part and no task binding
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::text(text)],
            message_id: Uuid::new_v4().to_string(),
            context_id: None,
            task_id: None,
            metadata: None,
        }
    }

    /// Concatenate all text parts with the given delimiter
    pub fn text_content(&self, delimiter: &str) -> String {
        self.parts
            .iter()
            .filter_map(Part::as_text)
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_wire_format() {
        let raw = json!({
            "role": "user",
            "parts": [{"kind": "text", "text": "hello"}, {"kind": "data", "data": {"a": 1}}],
            "messageId": "m-1",
            "contextId": "ctx-1",
            "kind": "message"
        });
        let message: Message = serde_json::from_value(raw).unwrap();
        assert_eq!(message.role, Role::User);
        assert_eq!(message.context_id.as_deref(), Some("ctx-1"));
        assert_eq!(message.task_id, None);
        assert_eq!(message.text_content("\n"), "hello");
    }

    #[test]
    fn test_agent_text_binds_task_and_context() {
        let message = Message::agent_text("working", "ctx", "task");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "agent");
        assert_eq!(value["contextId"], "ctx");
        assert_eq!(value["taskId"], "task");
        assert_eq!(value["parts"][0]["kind"], "text");
        assert_eq!(value["parts"][0]["text"], "working");
    }

    #[test]
    fn test_text_content_joins_text_parts_only() {
        let mut message = Message::user_text("first");
        message.parts.push(Part::File { file: json!({"uri": "x"}) });
        message.parts.push(Part::text("second"));
        assert_eq!(message.text_content("\n"), "first\nsecond");
    }
}
