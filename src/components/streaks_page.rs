//! Streaks Page
//!
//! Header, progress summary and one row per task. Toggling goes through
//! the backend and swaps the returned task into the context.

use chichi_domain::{completed_count, total_points, Task};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{StreakPageHeader, TaskRow};
use crate::commands;
use crate::context::use_task_context;

/// "2 of 4 completed · 40 points"
pub fn progress_summary(tasks: &[Task]) -> String {
    format!(
        "{} of {} completed · {} points",
        completed_count(tasks),
        tasks.len(),
        total_points(tasks)
    )
}

#[component]
pub fn StreaksPage() -> impl IntoView {
    let ctx = use_task_context();

    let on_toggle = Callback::new(move |id: String| {
        spawn_local(async move {
            match commands::toggle_task(&id).await {
                Ok(task) => ctx.replace_task(task),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[STREAKS] Toggle {} failed: {}", id, e).into(),
                    );
                    ctx.toggle_failed(e);
                }
            }
        });
    });

    let toggle_notice = move || {
        ctx.toggle_error.get().map(|message| {
            view! {
                <div class="toggle-error">
                    <span class="error-message">{message}</span>
                    <button class="dismiss-btn" on:click=move |_| ctx.dismiss_toggle_error()>
                        "✕"
                    </button>
                </div>
            }
        })
    };

    let body = move || {
        if let Some(message) = ctx.load_error.get() {
            return view! { <p class="error-message">{message}</p> }.into_any();
        }
        let Some(tasks) = ctx.tasks.get() else {
            return view! { <p class="loading-caption">"Loading tasks..."</p> }.into_any();
        };

        view! {
            <p class="streak-summary">{progress_summary(&tasks)}</p>
            {toggle_notice}
            <div class="task-list">
                {tasks
                    .into_iter()
                    .map(|task| view! { <TaskRow task=task on_toggle=on_toggle /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="streaks-page">
            <StreakPageHeader />
            {body}
        </section>
    }
}
