#![allow(clippy::doc_markdown)] // Allow technical terms like Langflow, JSON-RPC in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # A2A Langflow Bridge
//!
//! An A2A agent that answers every task by running a single Langflow flow.
//!
//! ## Overview
//!
//! Each inbound message becomes a task. The executor announces that work has
//! started, sends the user's text to the configured flow run endpoint, digs the
//! reply text out of the nested flow response and publishes it as an artifact
//! before resolving the task. Every error or panic along the way still resolves
//! the task, as `failed`, with exactly one final event.
//!
//! ## Module Organization
//!
//! - [`client`] - Workflow client and response text extraction
//! - [`orchestration`] - Task lifecycle executor and request handler
//! - [`state_machine`] - Task state transitions
//! - [`events`] - Lifecycle events and the event sink
//! - [`models`] - A2A protocol data model
//! - [`store`] - Task records between requests
//! - [`config`] - Environment-driven configuration
//! - [`web`] - axum HTTP and JSON-RPC surface
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use langflow_bridge::config::LangflowConfig;
//! use langflow_bridge::events::EventQueue;
//! use langflow_bridge::models::{Message, Task};
//! use langflow_bridge::orchestration::{AgentExecutor, LangflowAgentExecutor, RequestContext};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LangflowConfig::new("http://localhost:7860/api/v1/run/my-flow", None)?;
//! let executor = LangflowAgentExecutor::new(&config)?;
//!
//! let message = Message::user_text("What is the capital of France?");
//! let task = Task::from_message(&message);
//! let context = RequestContext::for_task(&task, message);
//!
//! let (queue, mut stream) = EventQueue::channel();
//! executor.execute(&context, &queue).await;
//! for event in stream.drain() {
//!     println!("{}", event.name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod logging;
pub mod models;
pub mod orchestration;
pub mod state_machine;
pub mod store;
pub mod web;

pub use client::{extract_message_text, LangflowClient, WorkflowClient};
pub use config::{BridgeConfig, ConfigManager, DeploymentProfile, LangflowConfig, ServerConfig};
pub use error::{BridgeError, BridgeResult};
pub use events::{AgentEvent, EventQueue, EventSink, EventStream, PublishError};
pub use orchestration::{AgentExecutor, DefaultRequestHandler, LangflowAgentExecutor, RequestContext};
pub use state_machine::{TaskEvent, TaskState, TaskStateMachine};
pub use store::{InMemoryTaskStore, TaskStore};
