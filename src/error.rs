//! # Bridge Error Types
//!
//! Unified error handling for the bridge. Configuration errors are fatal at
//! startup; every per-execution error is contained by the executor and turned
//! into a `failed` status event.

use crate::events::PublishError;
use crate::state_machine::StateMachineError;
use thiserror::Error;

/// Bridge operation result type
pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("HTTP request to workflow engine failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Workflow engine returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to decode workflow engine response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Event publishing failed: {0}")]
    Publish(#[from] PublishError),

    #[error("State transition error: {0}")]
    StateTransition(#[from] StateMachineError),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Task not found: {task_id}")]
    TaskNotFound { task_id: String },

    #[error("Task cannot be canceled: {task_id}")]
    TaskNotCancelable { task_id: String },

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Create an HTTP status error from a non-success response
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Network failures and non-success statuses from the workflow engine
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    /// Permanent capability limitations; retrying is never meaningful
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation(_))
    }
}
