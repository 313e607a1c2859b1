//! Chichi Domain
//!
//! Data shapes shared by the frontend and the Tauri host.
//! No I/O lives here, only types and the checks a conforming producer runs.

mod entity;
mod feedback;
mod task;

pub use entity::{DomainError, DomainResult, Entity};
pub use feedback::{
    BrowserInfo, Feedback, FeedbackDraft, FeedbackType, LogEntry, LogLevel, PersistedFeedback,
};
pub use task::{completed_count, ensure_unique_ids, total_points, Task};
