//! Task Row Component
//!
//! One streak task with its checkbox, label and reward.

use chichi_domain::Task;
use leptos::prelude::*;

/// Single task row
///
/// # Arguments
/// * `task` - Task to display
/// * `on_toggle` - Called with the task id when the checkbox changes
#[component]
pub fn TaskRow(
    task: Task,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    let id = task.id.clone();
    let row_class = if task.completed {
        "task-row completed"
    } else {
        "task-row"
    };

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                class="task-checkbox"
                checked=task.completed
                on:change=move |_| on_toggle.run(id.clone())
            />
            <span class="task-label">{task.label}</span>
            <span class="task-points">{format!("+{} pts", task.points)}</span>
        </div>
    }
}
