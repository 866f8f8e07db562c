//! # Orchestration
//!
//! Task lifecycle orchestration: the executor contract, the Langflow executor
//! and the request handler that connects executors to the task store.

pub mod context;
pub mod executor;
pub mod request_handler;

pub use context::RequestContext;
pub use executor::{AgentExecutor, LangflowAgentExecutor};
pub use request_handler::DefaultRequestHandler;
