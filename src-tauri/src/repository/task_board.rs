//! In-Memory Task Board
//!
//! Owns the task collection for the lifetime of the process.

use std::sync::Arc;

use async_trait::async_trait;
use chichi_domain::{ensure_unique_ids, DomainError, DomainResult, Task};
use tokio::sync::Mutex;

use super::traits::TaskSource;

#[derive(Clone)]
pub struct TaskBoard {
    tasks: Arc<Mutex<Vec<Task>>>,
}

impl TaskBoard {
    /// Build a board from seed tasks; ids must be unique.
    pub fn new(tasks: Vec<Task>) -> DomainResult<Self> {
        ensure_unique_ids(&tasks)?;
        Ok(Self {
            tasks: Arc::new(Mutex::new(tasks)),
        })
    }
}

#[async_trait]
impl TaskSource for TaskBoard {
    async fn list(&self) -> DomainResult<Vec<Task>> {
        Ok(self.tasks.lock().await.clone())
    }

    async fn toggle(&self, id: &str) -> DomainResult<Task> {
        let mut tasks = self.tasks.lock().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("task '{}'", id)))?;
        task.toggle();
        Ok(task.clone())
    }
}
