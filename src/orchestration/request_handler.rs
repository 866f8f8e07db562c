//! # Request Handler
//!
//! Transport-facing operations: resolves or creates the task record, runs the
//! executor against a fresh event queue and folds the published events back
//! into the stored task in publish order.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::context::RequestContext;
use super::executor::AgentExecutor;
use crate::error::{BridgeError, BridgeResult};
use crate::events::{EventQueue, EventStream};
use crate::models::{MessageSendParams, Task, TaskIdParams, TaskQueryParams};
use crate::store::TaskStore;

#[derive(Clone)]
pub struct DefaultRequestHandler {
    executor: Arc<dyn AgentExecutor>,
    store: Arc<dyn TaskStore>,
}

impl DefaultRequestHandler {
    pub fn new(executor: Arc<dyn AgentExecutor>, store: Arc<dyn TaskStore>) -> Self {
        Self { executor, store }
    }

    /// Handle `message/send`: run the task to completion and return its final record
    pub async fn on_message_send(&self, params: MessageSendParams) -> BridgeResult<Task> {
        let mut message = params.message;

        let mut task = match message.task_id.as_deref() {
            Some(task_id) => {
                let mut task = self.store.get(task_id).await.ok_or_else(|| {
                    BridgeError::TaskNotFound {
                        task_id: task_id.to_string(),
                    }
                })?;
                if task.status.state.is_terminal() {
                    return Err(BridgeError::InvalidParams(format!(
                        "Task {task_id} is in terminal state: {}",
                        task.status.state
                    )));
                }
                if message
                    .context_id
                    .as_ref()
                    .is_some_and(|context_id| context_id != &task.context_id)
                {
                    return Err(BridgeError::InvalidParams(format!(
                        "Message context does not match task {task_id}"
                    )));
                }
                message.context_id = Some(task.context_id.clone());
                task.history.push(message.clone());
                task
            }
            None => {
                let task = Task::from_message(&message);
                message.task_id = Some(task.id.clone());
                message.context_id = Some(task.context_id.clone());
                debug!(task_id = %task.id, context_id = %task.context_id, "Created task");
                task
            }
        };
        self.store.save(task.clone()).await;

        let context = RequestContext::for_task(&task, message);
        let (queue, stream) = EventQueue::channel();
        self.executor.execute(&context, &queue).await;
        drop(queue);

        Self::consume(&mut task, stream).await;
        self.store.save(task.clone()).await;

        info!(task_id = %task.id, state = %task.status.state, "Message handled");
        Ok(task)
    }

    /// Handle `tasks/get`
    pub async fn on_get_task(&self, params: TaskQueryParams) -> BridgeResult<Task> {
        let task = self.load(&params.id).await?;
        Ok(task.with_history_limit(params.history_length))
    }

    /// Handle `tasks/cancel`
    pub async fn on_cancel_task(&self, params: TaskIdParams) -> BridgeResult<Task> {
        let mut task = self.load(&params.id).await?;
        if task.status.state.is_terminal() {
            return Err(BridgeError::TaskNotCancelable { task_id: task.id });
        }

        let context = RequestContext {
            task_id: task.id.clone(),
            context_id: task.context_id.clone(),
            message: None,
        };
        let (queue, stream) = EventQueue::channel();
        self.executor.cancel(&context, &queue).await?;
        drop(queue);

        Self::consume(&mut task, stream).await;
        self.store.save(task.clone()).await;
        Ok(task)
    }

    async fn load(&self, task_id: &str) -> BridgeResult<Task> {
        self.store
            .get(task_id)
            .await
            .ok_or_else(|| BridgeError::TaskNotFound {
                task_id: task_id.to_string(),
            })
    }

    async fn consume(task: &mut Task, mut stream: EventStream) {
        while let Some(event) = stream.next().await {
            if event.task_id() != task.id {
                warn!(
                    expected = %task.id,
                    received = %event.task_id(),
                    "Dropping event for another task"
                );
                continue;
            }
            task.apply_event(&event);
        }
    }
}
