//! # Protocol Models
//!
//! A2A data model exchanged with callers: tasks, messages, artifacts and the
//! agent card. Field names follow the protocol's camelCase wire format.

pub mod agent_card;
pub mod message;
pub mod params;
pub mod task;

pub use agent_card::{AgentCapabilities, AgentCard, AgentSkill};
pub use message::{Message, Part, Role};
pub use params::{MessageSendParams, TaskIdParams, TaskQueryParams};
pub use task::{Artifact, Task, TaskStatus};
