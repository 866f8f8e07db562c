pub mod publisher;
pub mod types;

// Re-export key types for convenience
pub use publisher::{EventQueue, EventSink, EventStream, PublishError};
pub use types::{AgentEvent, TaskArtifactUpdateEvent, TaskStatusUpdateEvent};
