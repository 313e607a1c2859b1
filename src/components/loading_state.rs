//! Loading State Component
//!
//! Centered spinner with a fixed caption. Shown by the pages while the
//! task list request is pending.

use leptos::prelude::*;

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="loading-state" role="status">
            <div class="spinner" aria-hidden="true"></div>
            <p class="loading-caption">"Loading your feed..."</p>
        </div>
    }
}
