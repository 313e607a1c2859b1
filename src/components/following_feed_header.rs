//! Following Feed Header
//!
//! Static title block for the feed page.

use leptos::prelude::*;

#[component]
pub fn FollowingFeedHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-title">"Following Feed"</h1>
            <p class="page-subtitle">
                "Stay updated with the creators you follow and their latest achievements"
            </p>
        </header>
    }
}
