//! # Task Store
//!
//! Persistence seam for task records between requests. The bridge ships an
//! in-memory implementation; records live for the lifetime of the process.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::models::Task;

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn get(&self, task_id: &str) -> Option<Task>;
    async fn save(&self, task: Task);
}

/// Concurrent in-memory task store
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: DashMap<String, Task>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn get(&self, task_id: &str) -> Option<Task> {
        self.tasks.get(task_id).map(|entry| entry.value().clone())
    }

    async fn save(&self, task: Task) {
        debug!(task_id = %task.id, state = %task.status.state, "Saving task");
        self.tasks.insert(task.id.clone(), task);
    }
}
