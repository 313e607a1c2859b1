//! Task Entity
//!
//! A completable, point-valued unit of user progress.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::entity::{require_text, DomainError, DomainResult, Entity};

/// A task shown on the streaks page
///
/// `points` is unsigned, so a negative reward cannot be represented.
/// Deserialization goes through [`Task::new`] and rejects empty ids and labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTask")]
pub struct Task {
    /// Unique within its owning collection
    pub id: String,
    /// Human-readable description
    pub label: String,
    /// Reward value
    pub points: u32,
    /// Completion status
    pub completed: bool,
}

#[derive(Deserialize)]
struct RawTask {
    id: String,
    label: String,
    points: u32,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<RawTask> for Task {
    type Error = DomainError;

    fn try_from(raw: RawTask) -> DomainResult<Self> {
        let mut task = Task::new(raw.id, raw.label, raw.points)?;
        task.completed = raw.completed;
        Ok(task)
    }
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: impl Into<String>, label: impl Into<String>, points: u32) -> DomainResult<Self> {
        let id = id.into();
        let label = label.into();
        require_text("task id", &id)?;
        require_text("task label", &label)?;
        Ok(Self {
            id,
            label,
            points,
            completed: false,
        })
    }

    /// Flip the completion state
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl Entity for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Points earned so far (completed tasks only)
pub fn total_points(tasks: &[Task]) -> u32 {
    tasks
        .iter()
        .filter(|t| t.completed)
        .fold(0u32, |sum, t| sum.saturating_add(t.points))
}

pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.completed).count()
}

/// Fails with `Conflict` on the first repeated id.
pub fn ensure_unique_ids<E: Entity>(entities: &[E]) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(DomainError::Conflict(format!("duplicate id '{}'", entity.id())));
        }
    }
    Ok(())
}
