//! Country directory state, derived views, and the fetch lifecycle.
//!
//! This module defines [`DirectoryState`], the source-of-truth fields of the
//! directory, and [`DirectoryStore`], a cloneable handle that owns the state
//! behind a lock and runs the asynchronous operations against it.
//!
//! # Derived views
//!
//! `filtered_records`, `visible_records`, `has_more`, and `total_count` are
//! never stored. They are recomputed from the current state on every read, so
//! they cannot observe a stale combination of records, filters, and cursor.
//!
//! # Lifecycle
//!
//! ```text
//! idle ──fetch──▶ loading ──ok──▶ ready
//!                    │
//!                    └──err──▶ errored
//! ```
//!
//! Any state may re-enter `loading` by fetching again. Overlapping fetches are
//! not de-duplicated: each one overwrites the records and flags when it
//! completes, so the last one to finish wins.

use crate::domain::error::ExplorerError;
use crate::domain::{format_grouped, Country, NumberLocale};
use crate::infrastructure::http::CountrySource;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

/// Number of records revealed initially and by each load-more.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Region filter value that disables region filtering.
pub const ALL_REGIONS: &str = "All";

/// Simulated latency of an incremental load.
pub const DEFAULT_LOAD_MORE_DELAY: Duration = Duration::from_millis(500);

/// Message used when a failure carries no description of its own.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Filters `records` by region and name query, preserving order.
///
/// A `region` of [`ALL_REGIONS`] keeps every region; otherwise the match is
/// exact and case-sensitive. A `query` that is empty after trimming keeps every
/// record; otherwise the trimmed, lower-cased query must be a substring of the
/// lower-cased common or official name.
///
/// # Examples
///
/// ```
/// use country_explorer::app::directory::filter_records;
/// use country_explorer::Country;
///
/// let records = vec![
///     Country::new("France", "French Republic", "Europe"),
///     Country::new("Germany", "Federal Republic of Germany", "Europe"),
///     Country::new("Japan", "Japan", "Asia"),
/// ];
///
/// let names: Vec<_> = filter_records(&records, "Europe", "fra")
///     .iter()
///     .map(|c| c.name.common.as_str())
///     .collect();
/// assert_eq!(names, vec!["France"]);
/// ```
#[must_use]
pub fn filter_records<'a>(records: &'a [Country], region: &str, query: &str) -> Vec<&'a Country> {
    let _span = tracing::trace_span!("filter_records",
        total = records.len(),
        region = %region,
        query_len = query.len()
    ).entered();

    let needle = query.trim().to_lowercase();

    records
        .iter()
        .filter(|country| region == ALL_REGIONS || country.region == region)
        .filter(|country| needle.is_empty() || country.name_contains(&needle))
        .collect()
}

/// Source-of-truth fields of the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryState {
    /// Full fetched set in server order, minus the excluded record.
    pub all_records: Vec<Country>,
    pub search_query: String,
    /// Exact region name, or [`ALL_REGIONS`].
    pub selected_region: String,
    /// Pagination cursor into the filtered view.
    pub visible_count: usize,
    /// `true` until the first fetch completes, and during every fetch.
    pub is_loading: bool,
    pub is_loading_more: bool,
    /// Display message of the most recent fetch failure.
    pub error: Option<String>,
    pub page_size: usize,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl DirectoryState {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            all_records: Vec::new(),
            search_query: String::new(),
            selected_region: ALL_REGIONS.to_string(),
            visible_count: page_size,
            is_loading: true,
            is_loading_more: false,
            error: None,
            page_size,
        }
    }

    /// Records matching the region and search filters, in original order.
    #[must_use]
    pub fn filtered_records(&self) -> Vec<&Country> {
        filter_records(&self.all_records, &self.selected_region, &self.search_query)
    }

    /// The first `visible_count` filtered records.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&Country> {
        let mut filtered = self.filtered_records();
        filtered.truncate(self.visible_count);
        filtered
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.visible_count < self.filtered_records().len()
    }

    /// Size of the unfiltered record set.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.all_records.len()
    }

    /// Distinct regions of the record set in first-seen order.
    #[must_use]
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = Vec::new();
        for country in &self.all_records {
            if !country.region.is_empty() && !regions.contains(&country.region.as_str()) {
                regions.push(&country.region);
            }
        }
        regions
    }

    /// Returns `true` when either filter narrows the record set.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.selected_region != ALL_REGIONS || !self.search_query.trim().is_empty()
    }
}

/// Construction options for [`DirectoryStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryOptions {
    pub page_size: usize,
    pub load_more_delay: Duration,
    pub locale: NumberLocale,
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            load_more_delay: DEFAULT_LOAD_MORE_DELAY,
            locale: NumberLocale::default(),
        }
    }
}

/// Clears a loading flag when dropped.
///
/// Held across the await point of an async operation, so the flag is cleared on
/// success, on failure, and when the future is dropped before completion.
struct FlagGuard<'a> {
    state: &'a RwLock<DirectoryState>,
    clear: fn(&mut DirectoryState),
}

impl<'a> FlagGuard<'a> {
    fn new(state: &'a RwLock<DirectoryState>, clear: fn(&mut DirectoryState)) -> Self {
        Self { state, clear }
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        (self.clear)(&mut *state);
    }
}

/// Cloneable handle to the directory state and its data source.
///
/// Clones share the same state. Locks are only held for the duration of a
/// read or a field update, never across an await.
#[derive(Clone)]
pub struct DirectoryStore {
    state: Arc<RwLock<DirectoryState>>,
    source: Arc<dyn CountrySource>,
    load_more_delay: Duration,
    locale: NumberLocale,
}

impl DirectoryStore {
    /// Creates an empty store in the initial loading state.
    pub fn new(source: Arc<dyn CountrySource>, options: DirectoryOptions) -> Self {
        Self {
            state: Arc::new(RwLock::new(DirectoryState::new(options.page_size))),
            source,
            load_more_delay: options.load_more_delay,
            locale: options.locale,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, DirectoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DirectoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&DirectoryState) -> R) -> R {
        f(&*self.read())
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> DirectoryState {
        self.read().clone()
    }

    #[must_use]
    pub fn filtered_records(&self) -> Vec<Country> {
        self.with_state(|s| s.filtered_records().into_iter().cloned().collect())
    }

    #[must_use]
    pub fn visible_records(&self) -> Vec<Country> {
        self.with_state(|s| s.visible_records().into_iter().cloned().collect())
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.with_state(DirectoryState::has_more)
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.with_state(DirectoryState::total_count)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().is_loading
    }

    #[must_use]
    pub fn is_loading_more(&self) -> bool {
        self.read().is_loading_more
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.read().visible_count
    }

    #[must_use]
    pub fn search_query(&self) -> String {
        self.read().search_query.clone()
    }

    #[must_use]
    pub fn selected_region(&self) -> String {
        self.read().selected_region.clone()
    }

    /// Sets the name query. Does not touch the display count.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.write().search_query = query.into();
    }

    /// Sets the region filter. Does not touch the display count.
    pub fn set_selected_region(&self, region: impl Into<String>) {
        self.write().selected_region = region.into();
    }

    /// Resets the pagination cursor to one page.
    pub fn reset_display_count(&self) {
        let mut state = self.write();
        let page_size = state.page_size;
        state.visible_count = page_size;
    }

    /// Formats a population with the store's locale.
    #[must_use]
    pub fn format_population(&self, population: u64) -> String {
        format_grouped(population, self.locale)
    }

    /// Fetches the full record set and replaces the stored records.
    ///
    /// Sets `is_loading` and clears `error` first. On success the records are
    /// replaced, minus the excluded country. On failure `error` receives a
    /// display message and the records are left untouched. `is_loading` is
    /// cleared on every path. Errors never propagate past the store.
    pub async fn fetch_countries(&self) {
        {
            let mut state = self.write();
            state.is_loading = true;
            state.error = None;
        }
        let _loading = FlagGuard::new(&self.state, |s| s.is_loading = false);

        tracing::debug!("fetching countries");

        match self.source.fetch_all().await {
            Ok(countries) => {
                let received = countries.len();
                let kept: Vec<Country> = countries.into_iter().filter(|c| !c.is_excluded()).collect();

                tracing::debug!(received = received, kept = kept.len(), "countries fetched");

                self.write().all_records = kept;
            }
            Err(err) => {
                let message = error_message(&err);
                tracing::error!(error = %message, "error fetching countries");
                self.write().error = Some(message);
            }
        }
    }

    /// Reveals one more page after a simulated delay.
    ///
    /// All records are already in memory; the delay only paces the UI. Calling
    /// this past the end is harmless because slicing is clamped.
    pub async fn load_more(&self) {
        self.write().is_loading_more = true;
        let _loading_more = FlagGuard::new(&self.state, |s| s.is_loading_more = false);

        tokio::time::sleep(self.load_more_delay).await;

        let visible_count = {
            let mut state = self.write();
            let page_size = state.page_size;
            state.visible_count += page_size;
            state.visible_count
        };
        tracing::debug!(visible_count = visible_count, "loaded more countries");
    }
}

impl std::fmt::Debug for DirectoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryStore")
            .field("state", &*self.read())
            .field("load_more_delay", &self.load_more_delay)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

/// Converts a fetch failure into the message shown to the user.
fn error_message(err: &ExplorerError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}
