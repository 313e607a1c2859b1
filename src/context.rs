//! Application Context
//!
//! Task list state provided via Leptos Context API.

use chichi_domain::Task;
use leptos::prelude::*;

/// Task list signals shared by the feed and streaks pages
#[derive(Clone, Copy)]
pub struct TaskContext {
    /// Loaded tasks - read (None while the first request is pending)
    pub tasks: ReadSignal<Option<Vec<Task>>>,
    /// Loaded tasks - write
    set_tasks: WriteSignal<Option<Vec<Task>>>,
    /// Initial load failure - read (replaces the page body)
    pub load_error: ReadSignal<Option<String>>,
    /// Initial load failure - write
    set_load_error: WriteSignal<Option<String>>,
    /// Last toggle failure - read (shown above the rows until dismissed)
    pub toggle_error: ReadSignal<Option<String>>,
    /// Last toggle failure - write
    set_toggle_error: WriteSignal<Option<String>>,
}

impl TaskContext {
    pub fn new() -> Self {
        let (tasks, set_tasks) = signal(None::<Vec<Task>>);
        let (load_error, set_load_error) = signal(None::<String>);
        let (toggle_error, set_toggle_error) = signal(None::<String>);
        Self {
            tasks,
            set_tasks,
            load_error,
            set_load_error,
            toggle_error,
            set_toggle_error,
        }
    }

    /// Store a freshly loaded list and clear any load error
    pub fn loaded(&self, tasks: Vec<Task>) {
        self.set_tasks.set(Some(tasks));
        self.set_load_error.set(None);
    }

    pub fn load_failed(&self, message: String) {
        self.set_load_error.set(Some(message));
    }

    /// Record a failed toggle; the loaded list is left untouched
    pub fn toggle_failed(&self, message: String) {
        self.set_toggle_error.set(Some(message));
    }

    pub fn dismiss_toggle_error(&self) {
        self.set_toggle_error.set(None);
    }

    /// Swap in an updated task, matched by id, and clear the toggle error
    pub fn replace_task(&self, updated: Task) {
        self.set_tasks.update(|tasks| {
            if let Some(slot) = tasks
                .as_mut()
                .and_then(|list| list.iter_mut().find(|t| t.id == updated.id))
            {
                *slot = updated;
            }
        });
        self.set_toggle_error.set(None);
    }
}

/// Get the task context
pub fn use_task_context() -> TaskContext {
    expect_context::<TaskContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, completed: bool) -> Task {
        let mut task = Task::new(id, format!("Task {}", id), 10).unwrap();
        task.completed = completed;
        task
    }

    #[test]
    fn test_starts_pending() {
        Owner::new().with(|| {
            let ctx = TaskContext::new();
            assert!(ctx.tasks.get_untracked().is_none());
            assert!(ctx.load_error.get_untracked().is_none());
            assert!(ctx.toggle_error.get_untracked().is_none());
        });
    }

    #[test]
    fn test_loaded_clears_load_error() {
        Owner::new().with(|| {
            let ctx = TaskContext::new();
            ctx.load_failed("boom".to_string());
            ctx.loaded(vec![task("a", false)]);
            assert_eq!(ctx.tasks.get_untracked().map(|l| l.len()), Some(1));
            assert!(ctx.load_error.get_untracked().is_none());
        });
    }

    #[test]
    fn test_toggle_failure_keeps_tasks() {
        Owner::new().with(|| {
            let ctx = TaskContext::new();
            ctx.loaded(vec![task("a", false), task("b", false)]);

            ctx.toggle_failed("Not found: task 'a'".to_string());
            assert_eq!(ctx.tasks.get_untracked().map(|l| l.len()), Some(2));
            assert!(ctx.load_error.get_untracked().is_none());
            assert_eq!(ctx.toggle_error.get_untracked().as_deref(), Some("Not found: task 'a'"));

            ctx.dismiss_toggle_error();
            assert!(ctx.toggle_error.get_untracked().is_none());
        });
    }

    #[test]
    fn test_successful_toggle_clears_toggle_error() {
        Owner::new().with(|| {
            let ctx = TaskContext::new();
            ctx.loaded(vec![task("a", false)]);
            ctx.toggle_failed("timeout".to_string());

            ctx.replace_task(task("a", true));
            assert!(ctx.toggle_error.get_untracked().is_none());
        });
    }

    #[test]
    fn test_replace_task() {
        Owner::new().with(|| {
            let ctx = TaskContext::new();
            ctx.loaded(vec![task("a", false), task("b", false)]);

            ctx.replace_task(task("b", true));
            ctx.replace_task(task("missing", true));

            let tasks = ctx.tasks.get_untracked().unwrap();
            assert_eq!(tasks.len(), 2);
            assert!(!tasks[0].completed);
            assert!(tasks[1].completed);
        });
    }
}
