//! # Langflow Agent Executor
//!
//! Drives one task execution through its lifecycle and delegates the work to a
//! Langflow flow.
//!
//! ## Event Sequence
//!
//! ```text
//! success:            working(final=false) -> artifact -> completed(final=true)
//! workflow failure:   working(final=false) -> failed(final=true)
//! missing message:    failed(final=true)
//! ```
//!
//! Every status event passes through a per-execution [`TaskStateMachine`]. The
//! whole execution body, including the first emission, runs inside a single
//! boundary that converts errors and panics into exactly one terminal event.

use async_trait::async_trait;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::context::RequestContext;
use crate::client::{extract_message_text, LangflowClient, WorkflowClient};
use crate::config::LangflowConfig;
use crate::constants::{ARTIFACT_NAME, FAILURE_MESSAGE_PREFIX, WORKING_MESSAGE};
use crate::error::{BridgeError, BridgeResult};
use crate::events::{AgentEvent, EventSink, TaskArtifactUpdateEvent, TaskStatusUpdateEvent};
use crate::logging::{log_error, log_task_operation};
use crate::models::{Artifact, Message, TaskStatus};
use crate::state_machine::{TaskEvent, TaskState, TaskStateMachine};

/// Agent logic invoked by the transport for each inbound request
#[async_trait]
pub trait AgentExecutor: Send + Sync {
    /// Run the task to a terminal event; never fails outward
    async fn execute(&self, context: &RequestContext, events: &dyn EventSink);

    /// Request cancellation of an in-flight task
    async fn cancel(&self, context: &RequestContext, events: &dyn EventSink) -> BridgeResult<()>;
}

/// Executor that answers every task with one Langflow flow run
pub struct LangflowAgentExecutor {
    client: Arc<dyn WorkflowClient>,
}

impl std::fmt::Debug for LangflowAgentExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LangflowAgentExecutor").finish_non_exhaustive()
    }
}

impl LangflowAgentExecutor {
    /// Build an executor for the configured endpoint
    ///
    /// Fails immediately with a configuration error when the endpoint is empty
    /// or invalid, before any task can run.
    pub fn new(config: &LangflowConfig) -> BridgeResult<Self> {
        let client = LangflowClient::new(config)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Build an executor around an existing workflow client
    pub fn with_client(client: Arc<dyn WorkflowClient>) -> Self {
        Self { client }
    }

    async fn run(&self, execution: &mut Execution<'_>) -> BridgeResult<()> {
        let context = execution.context;
        if context.message.is_none() {
            return Err(BridgeError::precondition("No message in context"));
        }
        let query = context.get_user_input();

        let working = Message::agent_text(WORKING_MESSAGE, &context.context_id, &context.task_id);
        execution
            .publish_status(&TaskEvent::Start, Some(working))
            .await?;

        info!(
            task_id = %context.task_id,
            context_id = %context.context_id,
            query = %query,
            "Executing Langflow with query"
        );
        let response = self
            .client
            .run_flow(&query, Some(&context.context_id))
            .await?;
        let response_text = extract_message_text(&response);

        let artifact = Artifact::text(
            ARTIFACT_NAME,
            format!("Response from Langflow for query: {query}"),
            response_text,
        );
        execution
            .publish(AgentEvent::ArtifactUpdate(TaskArtifactUpdateEvent {
                task_id: context.task_id.clone(),
                context_id: context.context_id.clone(),
                artifact,
                append: None,
                last_chunk: None,
            }))
            .await
    }
}

#[async_trait]
impl AgentExecutor for LangflowAgentExecutor {
    #[instrument(skip_all, fields(task_id = %context.task_id, context_id = %context.context_id))]
    async fn execute(&self, context: &RequestContext, events: &dyn EventSink) {
        let mut execution = Execution::new(context, events);

        let outcome = AssertUnwindSafe(self.run(&mut execution))
            .catch_unwind()
            .await;

        let terminal = match outcome {
            Ok(Ok(())) => TaskEvent::Complete,
            Ok(Err(e)) => {
                log_error(
                    "langflow_agent_executor",
                    "execute",
                    &e.to_string(),
                    Some(&context.task_id),
                );
                TaskEvent::fail_with_error(format!("{FAILURE_MESSAGE_PREFIX}: {e}"))
            }
            Err(panic) => {
                let detail = panic_message(panic.as_ref());
                log_error(
                    "langflow_agent_executor",
                    "execute",
                    &detail,
                    Some(&context.task_id),
                );
                TaskEvent::fail_with_error(format!("{FAILURE_MESSAGE_PREFIX}: {detail}"))
            }
        };

        execution.finish(terminal).await;
    }

    async fn cancel(&self, context: &RequestContext, _events: &dyn EventSink) -> BridgeResult<()> {
        warn!(task_id = %context.task_id, "Cancel requested for Langflow agent");
        Err(BridgeError::UnsupportedOperation(
            "Cancel not supported for Langflow agent".to_string(),
        ))
    }
}

/// Per-execution publishing state
struct Execution<'a> {
    context: &'a RequestContext,
    events: &'a dyn EventSink,
    machine: TaskStateMachine,
}

impl<'a> Execution<'a> {
    fn new(context: &'a RequestContext, events: &'a dyn EventSink) -> Self {
        Self {
            context,
            events,
            machine: TaskStateMachine::new(),
        }
    }

    async fn publish(&self, event: AgentEvent) -> BridgeResult<()> {
        self.events.publish(event).await?;
        Ok(())
    }

    async fn publish_status(
        &mut self,
        event: &TaskEvent,
        message: Option<Message>,
    ) -> BridgeResult<TaskState> {
        let state = self.machine.transition(event)?;
        self.publish(self.status_event(state, message)).await?;
        Ok(state)
    }

    fn status_event(&self, state: TaskState, message: Option<Message>) -> AgentEvent {
        AgentEvent::StatusUpdate(TaskStatusUpdateEvent {
            task_id: self.context.task_id.clone(),
            context_id: self.context.context_id.clone(),
            status: TaskStatus::new(state, message),
            is_final: state.is_terminal(),
        })
    }

    /// Publish the single terminal event of this execution
    async fn finish(&mut self, event: TaskEvent) {
        let (state, detail) = match self.machine.transition(&event) {
            Ok(state) => (state, event.error_message().map(str::to_string)),
            Err(e) => {
                warn!(error = %e, "Terminal transition rejected, resolving task as failed");
                (
                    TaskState::Failed,
                    Some(format!("{FAILURE_MESSAGE_PREFIX}: {e}")),
                )
            }
        };

        let message = detail.as_deref().map(|text| {
            Message::agent_text(text, &self.context.context_id, &self.context.task_id)
        });

        if let Err(e) = self.publish(self.status_event(state, message)).await {
            log_error(
                "langflow_agent_executor",
                "publish_terminal_event",
                &e.to_string(),
                Some(&self.context.task_id),
            );
            return;
        }

        log_task_operation(
            "execute",
            &self.context.task_id,
            &self.context.context_id,
            &state.to_string(),
            detail.as_deref(),
        );
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "execution panicked".to_string())
}
