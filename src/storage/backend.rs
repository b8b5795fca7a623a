//! Preference storage abstraction.
//!
//! This module defines the [`PreferenceStore`] trait, a minimal string key/value
//! interface modelled on browser local storage. The theme preference is the only
//! consumer today, keyed by [`THEME_KEY`].

use crate::domain::error::Result;

/// Key under which the color theme preference is persisted.
pub const THEME_KEY: &str = "theme";

/// Abstraction over persistent key/value preference backends.
///
/// # Implementations
///
/// - [`JsonPreferenceStore`](crate::storage::JsonPreferenceStore): JSON file with atomic writes
/// - [`MemoryPreferenceStore`](crate::storage::MemoryPreferenceStore): process-local map
///
/// # Examples
///
/// ```
/// use country_explorer::storage::{MemoryPreferenceStore, PreferenceStore, THEME_KEY};
///
/// let mut store = MemoryPreferenceStore::default();
/// store.set(THEME_KEY, "dark")?;
/// assert_eq!(store.get(THEME_KEY)?.as_deref(), Some("dark"));
/// # Ok::<(), country_explorer::ExplorerError>(())
/// ```
pub trait PreferenceStore: Send {
    /// Returns the stored value for `key`, or `Ok(None)` if it was never set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}
