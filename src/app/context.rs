//! Session-wide context holding both stores.
//!
//! The front end constructs one [`AppContext`] at startup and passes it to
//! whatever renders the UI. The two stores share nothing; the context only
//! groups them and computes the combined view model.

use crate::app::directory::{DirectoryState, DirectoryStore, ALL_REGIONS};
use crate::app::theme::ThemePreference;
use crate::ui::viewmodel::{CountryCard, DirectoryViewModel, EmptyState, HeaderInfo, ViewStatus};

/// Explicit owner of the theme preference and the directory store.
#[derive(Debug)]
pub struct AppContext {
    pub theme: ThemePreference,
    pub directory: DirectoryStore,
}

impl AppContext {
    #[must_use]
    pub const fn new(theme: ThemePreference, directory: DirectoryStore) -> Self {
        Self { theme, directory }
    }

    /// Flips the color theme. Returns the new `is_dark`.
    pub fn toggle_theme(&mut self) -> bool {
        self.theme.toggle()
    }

    /// Computes a renderable view model from the current state of both stores.
    ///
    /// Loading takes precedence over an error, and an error over the record
    /// list, mirroring what the page shows while a retry is in flight.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DirectoryViewModel {
        let is_dark = self.theme.is_dark();
        let directory = &self.directory;

        directory.with_state(|state| {
            let filtered = state.filtered_records();
            let visible = state.visible_records();

            let cards: Vec<CountryCard> = visible
                .iter()
                .map(|country| CountryCard::from_country(country, |n| directory.format_population(n)))
                .collect();

            let status = if state.is_loading {
                ViewStatus::Loading
            } else if let Some(error) = &state.error {
                ViewStatus::Error(error.clone())
            } else if filtered.is_empty() {
                ViewStatus::Empty(Self::compute_empty_state(state))
            } else {
                ViewStatus::Ready
            };

            let header = HeaderInfo {
                title: format!(
                    "Showing {} of {} countries",
                    visible.len(),
                    filtered.len()
                ),
                visible: visible.len(),
                filtered: filtered.len(),
                total: state.total_count(),
            };

            let regions = std::iter::once(ALL_REGIONS)
                .chain(state.regions())
                .map(String::from)
                .collect();

            DirectoryViewModel {
                status,
                cards,
                header,
                regions,
                search_query: state.search_query.clone(),
                selected_region: state.selected_region.clone(),
                has_more: state.visible_count < filtered.len(),
                is_loading_more: state.is_loading_more,
                is_dark,
            }
        })
    }

    fn compute_empty_state(state: &DirectoryState) -> EmptyState {
        if state.all_records.is_empty() {
            EmptyState {
                message: "No countries available".to_string(),
                subtitle: "The country list is empty. Try reloading.".to_string(),
            }
        } else {
            EmptyState {
                message: "No countries found".to_string(),
                subtitle: "Try a different search term or region.".to_string(),
            }
        }
    }
}
