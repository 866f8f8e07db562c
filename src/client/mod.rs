//! # Workflow Engine Client
//!
//! Outbound side of the bridge: the HTTP client for the Langflow run endpoint
//! and the extractor that turns its JSON reply into display text.

pub mod response_extractor;
pub mod workflow_client;

pub use response_extractor::extract_message_text;
pub use workflow_client::{FlowRunRequest, LangflowClient, WorkflowClient};
