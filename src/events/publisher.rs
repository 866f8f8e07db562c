use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::trace;

use super::types::AgentEvent;

/// Ordered, append-only channel for lifecycle events
///
/// Implementations must deliver events to their consumer in publish order.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn publish(&self, event: AgentEvent) -> Result<(), PublishError>;
}

/// Channel-backed event sink handed to the executor by the transport
#[derive(Debug, Clone)]
pub struct EventQueue {
    sender: mpsc::UnboundedSender<AgentEvent>,
}

/// Consumer side of an [`EventQueue`]
#[derive(Debug)]
pub struct EventStream {
    receiver: mpsc::UnboundedReceiver<AgentEvent>,
}

impl EventQueue {
    /// Create a connected queue and stream pair
    pub fn channel() -> (Self, EventStream) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, EventStream { receiver })
    }
}

#[async_trait]
impl EventSink for EventQueue {
    async fn publish(&self, event: AgentEvent) -> Result<(), PublishError> {
        let name = event.name();
        self.sender
            .send(event)
            .map_err(|_| PublishError::ChannelClosed)?;
        trace!(event = name, "Event enqueued");
        Ok(())
    }
}

impl EventStream {
    /// Receive the next event; `None` once every queue handle is dropped and drained
    pub async fn next(&mut self) -> Option<AgentEvent> {
        self.receiver.recv().await
    }

    /// Drain every event currently buffered without waiting
    pub fn drain(&mut self) -> Vec<AgentEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Error types for event publishing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    #[error("Event channel is closed")]
    ChannelClosed,
    #[error("Event rejected by sink: {0}")]
    Rejected(String),
}
