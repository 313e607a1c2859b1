//! Streak Page Header

use leptos::prelude::*;

#[component]
pub fn StreakPageHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-title">"Streaks & Badges"</h1>
            <p class="page-subtitle">"Track your consistency and unlock achievements"</p>
        </header>
    }
}
