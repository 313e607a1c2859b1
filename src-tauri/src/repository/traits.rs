//! Repository Layer - Core Traits
//!
//! Abstract access to the task collection.
//! The app ships an in-memory implementation; a stored one can slot in later.

use async_trait::async_trait;
use chichi_domain::{DomainResult, Task};

/// Source of the tasks shown on the streaks page
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// List all tasks in display order
    async fn list(&self) -> DomainResult<Vec<Task>>;

    /// Flip a task's completion state and return the updated task
    async fn toggle(&self, id: &str) -> DomainResult<Task>;
}
