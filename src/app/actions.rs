//! Deferred asynchronous work produced by the event handler.
//!
//! The handler itself is synchronous: it mutates state and returns the
//! [`Action`]s that still need to run. The front end awaits each one with
//! [`execute_action`] on the directory store, typically on a spawned task so
//! rendering continues while the request or delay is pending.

use crate::app::directory::DirectoryStore;
use tracing::Instrument;

/// Asynchronous operations requested by the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fetch the full country list.
    FetchCountries,
    /// Reveal the next page after the simulated delay.
    LoadMore,
}

/// Runs an action to completion against the directory store.
///
/// Takes the store rather than the whole context so the future is `Send` and
/// can be spawned with a cloned handle. Returns `true` because every action
/// changes what should be rendered.
pub async fn execute_action(directory: &DirectoryStore, action: Action) -> bool {
    let span = tracing::debug_span!("execute_action", action = ?action);

    async {
        match action {
            Action::FetchCountries => directory.fetch_countries().await,
            Action::LoadMore => directory.load_more().await,
        }
    }
    .instrument(span)
    .await;

    true
}
