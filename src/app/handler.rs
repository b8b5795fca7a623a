//! Event handling and state transition logic.
//!
//! This module translates UI events into store mutations and deferred
//! [`Action`]s. It owns the page-level policies the stores deliberately leave
//! to the UI layer:
//!
//! - changing either filter resets the display count to one page
//! - "load more" is only scheduled while more records exist and no load is
//!   already pending
//! - mounting fetches only when nothing has been loaded yet
//!
//! # Example
//!
//! ```rust,no_run
//! use country_explorer::app::{execute_action, handle_event, Event};
//! # async fn run(ctx: &mut country_explorer::AppContext) {
//! let (render, actions) = handle_event(ctx, &Event::SearchChanged("fra".into()));
//! for action in actions {
//!     execute_action(&ctx.directory, action).await;
//! }
//! # }
//! ```

use crate::app::directory::ALL_REGIONS;
use crate::app::{Action, AppContext};

/// Events triggered by user input or page lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The directory page was shown.
    Mounted,
    /// The theme switch was pressed.
    ToggleTheme,
    /// The search box content changed.
    SearchChanged(String),
    /// A region was picked, or "All".
    RegionChanged(String),
    /// Both filters were reset.
    ClearFilters,
    /// The "load more" control was pressed.
    LoadMoreRequested,
    /// The retry control on the error view was pressed.
    RetryRequested,
}

/// Processes an event, mutates state, and returns actions to execute.
///
/// # Returns
///
/// A `(needs_render, actions)` pair. `needs_render` is `true` when visible
/// state changed synchronously; actions are awaited by the caller and always
/// warrant a render when they complete.
pub fn handle_event(ctx: &mut AppContext, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mounted => {
            if ctx.directory.total_count() == 0 {
                tracing::debug!("no countries loaded, fetching");
                (false, vec![Action::FetchCountries])
            } else {
                (false, vec![])
            }
        }
        Event::RetryRequested => (false, vec![Action::FetchCountries]),
        Event::ToggleTheme => {
            let is_dark = ctx.toggle_theme();
            tracing::debug!(is_dark = is_dark, "theme toggled");
            (true, vec![])
        }
        Event::SearchChanged(query) => {
            if ctx.directory.search_query() == *query {
                return (false, vec![]);
            }
            ctx.directory.set_search_query(query.clone());
            ctx.directory.reset_display_count();

            tracing::trace!(query = %query, "search query updated");
            (true, vec![])
        }
        Event::RegionChanged(region) => {
            if ctx.directory.selected_region() == *region {
                return (false, vec![]);
            }
            ctx.directory.set_selected_region(region.clone());
            ctx.directory.reset_display_count();

            tracing::debug!(region = %region, "region filter updated");
            (true, vec![])
        }
        Event::ClearFilters => {
            ctx.directory.set_search_query(String::new());
            ctx.directory.set_selected_region(ALL_REGIONS);
            ctx.directory.reset_display_count();
            (true, vec![])
        }
        Event::LoadMoreRequested => {
            if !ctx.directory.has_more() {
                tracing::debug!("no more countries to show");
                return (false, vec![]);
            }
            if ctx.directory.is_loading_more() {
                tracing::debug!("load more already pending");
                return (false, vec![]);
            }
            (false, vec![Action::LoadMore])
        }
    }
}
