use crate::models::{Message, Task};

/// Inbound execution request handed to an executor by the transport
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub task_id: String,
    pub context_id: String,
    pub message: Option<Message>,
}

impl RequestContext {
    /// Context for a message addressed to an existing or freshly created task
    pub fn for_task(task: &Task, message: Message) -> Self {
        Self {
            task_id: task.id.clone(),
            context_id: task.context_id.clone(),
            message: Some(message),
        }
    }

    /// Text of the inbound message's text parts, newline separated
    pub fn get_user_input(&self) -> String {
        self.message
            .as_ref()
            .map(|message| message.text_content("\n"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Part;

    #[test]
    fn test_user_input_joins_text_parts() {
        let mut message = Message::user_text("line one");
        message.parts.push(Part::text("line two"));
        let task = Task::from_message(&message);
        let context = RequestContext::for_task(&task, message);

        assert_eq!(context.get_user_input(), "line one\nline two");
        assert_eq!(context.task_id, task.id);
        assert_eq!(context.context_id, task.context_id);
    }

    #[test]
    fn test_user_input_is_empty_without_message() {
        let context = RequestContext {
            task_id: "t".to_string(),
            context_id: "c".to_string(),
            message: None,
        };
        assert_eq!(context.get_user_input(), "");
    }
}
