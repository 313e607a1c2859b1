//! UI Components
//!
//! Page headers, status views and the two tab pages.

mod following_feed_header;
mod loading_state;
mod streak_page_header;
mod task_row;
mod feed_page;
mod streaks_page;

pub use following_feed_header::FollowingFeedHeader;
pub use loading_state::LoadingState;
pub use streak_page_header::StreakPageHeader;
pub use task_row::TaskRow;
pub use feed_page::FeedPage;
pub use streaks_page::StreaksPage;

#[cfg(test)]
use leptos::prelude::*;
#[cfg(test)]
use leptos::tachys::view::RenderHtml;

/// Render a view to an HTML string inside a fresh reactive owner.
#[cfg(test)]
pub(crate) fn render_static<V: IntoView + 'static>(view: impl FnOnce() -> V) -> String {
    Owner::new().with(|| view().to_html())
}
