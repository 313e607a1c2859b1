//! Chichi Frontend App
//!
//! Two-tab shell (Feed, Streaks) with a bottom navigation bar.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{FeedPage, StreaksPage};
use crate::context::TaskContext;

/// Tab selection
#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Feed,
    Streaks,
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = TaskContext::new();
    provide_context(ctx);

    let (current_tab, set_current_tab) = signal(Tab::Feed);

    // Initial load
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_tasks().await {
                Ok(tasks) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} tasks", tasks.len()).into());
                    ctx.loaded(tasks);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load tasks: {}", e).into());
                    ctx.load_failed(e);
                }
            }
        });
    });

    let nav_class = move |tab: Tab| {
        if current_tab.get() == tab {
            "nav-item active"
        } else {
            "nav-item"
        }
    };

    view! {
        <div class="app-container">
            <main class="app-content">
                {move || match current_tab.get() {
                    Tab::Feed => view! { <FeedPage /> }.into_any(),
                    Tab::Streaks => view! { <StreaksPage /> }.into_any(),
                }}
            </main>

            // Bottom navigation
            <nav class="bottom-nav">
                <button
                    class=move || nav_class(Tab::Feed)
                    on:click=move |_| set_current_tab.set(Tab::Feed)
                >
                    "Feed"
                </button>
                <button
                    class=move || nav_class(Tab::Streaks)
                    on:click=move |_| set_current_tab.set(Tab::Streaks)
                >
                    "Streaks"
                </button>
            </nav>
        </div>
    }
}
