//! Feed Page
//!
//! Header plus the achievements (completed tasks) once the list arrives.

use chichi_domain::Task;
use leptos::prelude::*;

use super::{FollowingFeedHeader, LoadingState};
use crate::context::use_task_context;

#[component]
pub fn FeedPage() -> impl IntoView {
    let ctx = use_task_context();

    let body = move || {
        if let Some(message) = ctx.load_error.get() {
            return view! { <p class="error-message">{message}</p> }.into_any();
        }
        let Some(tasks) = ctx.tasks.get() else {
            return view! { <LoadingState /> }.into_any();
        };

        let achievements: Vec<Task> = tasks.into_iter().filter(|t| t.completed).collect();
        if achievements.is_empty() {
            return view! {
                <p class="empty-feed">"No achievements yet. Finish a streak task to see it here."</p>
            }
            .into_any();
        }

        view! {
            <ul class="achievement-list">
                {achievements
                    .into_iter()
                    .map(|task| view! {
                        <li class="achievement">
                            <span class="achievement-label">{task.label}</span>
                            <span class="achievement-points">{format!("+{} pts", task.points)}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <section class="feed-page">
            <FollowingFeedHeader />
            {body}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_static;
    use crate::context::TaskContext;

    fn render_with(setup: impl FnOnce(&TaskContext)) -> String {
        render_static(move || {
            let ctx = TaskContext::new();
            setup(&ctx);
            provide_context(ctx);
            view! { <FeedPage /> }
        })
    }

    #[test]
    fn test_pending_shows_loading_state() {
        let html = render_with(|_| {});
        assert!(html.contains("Following Feed"));
        assert!(html.contains("Loading your feed..."));
    }

    #[test]
    fn test_loaded_lists_completed_tasks_only() {
        let html = render_with(|ctx| {
            let mut done = Task::new("a", "Share your first achievement", 10).unwrap();
            done.toggle();
            let open = Task::new("b", "Follow three creators", 15).unwrap();
            ctx.loaded(vec![done, open]);
        });
        assert!(!html.contains("Loading your feed..."));
        assert!(html.contains("Share your first achievement"));
        assert!(!html.contains("Follow three creators"));
    }

    #[test]
    fn test_empty_feed_message() {
        let html = render_with(|ctx| ctx.loaded(Vec::new()));
        assert!(html.contains("No achievements yet"));
    }

    #[test]
    fn test_error_replaces_loading_state() {
        let html = render_with(|ctx| ctx.load_failed("backend unavailable".to_string()));
        assert!(html.contains("backend unavailable"));
        assert!(!html.contains("Loading your feed..."));
    }

    #[test]
    fn test_toggle_failure_does_not_hide_feed() {
        let html = render_with(|ctx| {
            let mut done = Task::new("a", "Share your first achievement", 10).unwrap();
            done.toggle();
            ctx.loaded(vec![done]);
            ctx.toggle_failed("backend timed out".to_string());
        });
        assert!(html.contains("Share your first achievement"));
        assert!(!html.contains("backend timed out"));
    }
}
