//! Country Explorer: reactive state for a country directory page.
//!
//! The crate provides the two state containers behind a single-page country
//! explorer:
//! - A light/dark color theme preference, persisted and reflected onto the
//!   document root
//! - A country directory that fetches the REST Countries dataset and exposes
//!   filtered, paginated, display-ready views of it
//!
//! Rendering is left to the front end. Everything the stores touch outside
//! their own memory (HTTP, preference storage, the system appearance signal,
//! the document root) sits behind a trait in [`infrastructure`] or [`storage`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Front end (renders DirectoryViewModel)             │
//! └─────────────────────────────────────────────────────┘
//!                        │ Events / Actions
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - AppContext { theme, directory }                  │
//! │  - Event handling, deferred actions                 │
//! │  - Derived views, view model computation            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Models     │   │ Storage Layer │   │ Infrastructure│
//! │ (ui/)         │   │ (storage/)    │   │ - HTTP source │
//! │ - View models │   │ - JSON prefs  │   │ - Appearance  │
//! │               │   │ - Memory      │   │ - Paths       │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Country, errors, formatting      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Stores, event handler, actions, reactive signal
//! - [`domain`]: Country model, error types, number formatting
//! - [`infrastructure`]: HTTP source, appearance signal, document root, paths
//! - [`storage`]: Preference persistence
//! - [`ui`]: View models
//! - [`observability`]: Rotating file logging
//!
//! # Example
//!
//! ```rust,no_run
//! use country_explorer::{initialize, execute_action, handle_event, Config, Event};
//! use country_explorer::infrastructure::ClassList;
//! use std::sync::Arc;
//!
//! # async fn run() -> country_explorer::Result<()> {
//! let config = Config::default();
//! country_explorer::observability::init_tracing(&config);
//!
//! let document = ClassList::default();
//! let mut ctx = initialize(&config, Arc::new(document.clone()))?;
//!
//! let (_, actions) = handle_event(&mut ctx, &Event::Mounted);
//! for action in actions {
//!     execute_action(&ctx.directory, action).await;
//! }
//!
//! let view = ctx.compute_viewmodel();
//! println!("{}", view.header.title);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{
    execute_action, handle_event, Action, AppContext, ColorMode, DirectoryState, DirectoryStore, Event,
    ThemePreference,
};
pub use domain::{format_population, Country, ExplorerError, NumberLocale, Result};
pub use ui::DirectoryViewModel;

use app::DirectoryOptions;
use infrastructure::{
    paths, DocumentRoot, EnvAppearance, FixedAppearance, RestCountriesClient, SystemAppearance,
    DEFAULT_API_BASE_URL,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use storage::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};

/// Runtime configuration.
///
/// Every field has a default, so a partial TOML file or an empty map is a
/// valid configuration.
///
/// # Example
///
/// ```toml
/// api_base_url = "https://restcountries.com/v3.1"
/// request_timeout_secs = 10
/// load_more_delay_ms = 500
/// page_size = 12
/// locale = "de"
/// data_dir = "~/.local/share/country-explorer"
/// trace_level = "debug"
/// prefers_dark = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST Countries API, without the `/all` path.
    pub api_base_url: String,

    pub request_timeout_secs: u64,

    /// Simulated latency of "load more". Default: 500
    pub load_more_delay_ms: u64,

    /// Records per page. Default: 12
    pub page_size: usize,

    /// Digit grouping for populations. Default: `en-us`
    pub locale: NumberLocale,

    /// Directory for preferences and logs. `~` is expanded. Default: the
    /// platform data directory.
    pub data_dir: Option<String>,

    /// Log level filter. Options: `trace`, `debug`, `info`, `warn`, `error`.
    pub trace_level: Option<String>,

    /// Overrides the system dark-mode signal when set.
    pub prefers_dark: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 10,
            load_more_delay_ms: 500,
            page_size: app::directory::DEFAULT_PAGE_SIZE,
            locale: NumberLocale::default(),
            data_dir: None,
            trace_level: None,
            prefers_dark: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] on malformed TOML or mistyped values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use country_explorer::{Config, NumberLocale};
    ///
    /// let config = Config::from_toml_str("locale = \"de\"\npage_size = 24")?;
    /// assert_eq!(config.locale, NumberLocale::De);
    /// assert_eq!(config.page_size, 24);
    /// assert_eq!(config.load_more_delay_ms, 500);
    /// # Ok::<(), country_explorer::ExplorerError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ExplorerError::Config(e.to_string()))
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Io`] if the file cannot be read, or
    /// [`ExplorerError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Builds configuration from string key/value pairs.
    ///
    /// Intended for hosts that hand over flat settings (query strings,
    /// environment, embedder options). Unknown keys are ignored and values that
    /// fail to parse fall back to their defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `api_base_url`, `data_dir`, `trace_level`: taken as-is when non-empty
    /// - `request_timeout_secs`, `load_more_delay_ms`, `page_size`: integers
    /// - `page_size`: must be non-zero
    /// - `locale`: a tag such as `en-US` or `de-CH`
    /// - `prefers_dark`: `true`/`false` or `dark`/`light`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use country_explorer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "24".to_string());
    /// map.insert("prefers_dark".to_string(), "dark".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 24);
    /// assert_eq!(config.prefers_dark, Some(true));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let non_empty = |key: &str| {
            map.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let number = |key: &str| map.get(key).and_then(|s| s.trim().parse::<u64>().ok());

        let page_size = map
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.page_size);

        let prefers_dark = map.get("prefers_dark").and_then(|s| match s.trim() {
            "true" | "dark" => Some(true),
            "false" | "light" => Some(false),
            _ => None,
        });

        Self {
            api_base_url: non_empty("api_base_url").unwrap_or(defaults.api_base_url),
            request_timeout_secs: number("request_timeout_secs").unwrap_or(defaults.request_timeout_secs),
            load_more_delay_ms: number("load_more_delay_ms").unwrap_or(defaults.load_more_delay_ms),
            page_size,
            locale: map
                .get("locale")
                .and_then(|s| NumberLocale::from_tag(s))
                .unwrap_or(defaults.locale),
            data_dir: non_empty("data_dir"),
            trace_level: non_empty("trace_level"),
            prefers_dark,
        }
    }

    /// Resolved data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(paths::default_data_dir, paths::expand_tilde)
    }

    #[must_use]
    pub const fn load_more_delay(&self) -> Duration {
        Duration::from_millis(self.load_more_delay_ms)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub const fn directory_options(&self) -> DirectoryOptions {
        DirectoryOptions {
            page_size: self.page_size,
            load_more_delay: self.load_more_delay(),
            locale: self.locale,
        }
    }
}

/// Builds the application context with the real collaborators.
///
/// - Preferences: JSON file in the data directory, falling back to an
///   in-memory store if the file cannot be opened
/// - Appearance: `config.prefers_dark` if set, otherwise `COLORFGBG`
/// - Countries: [`RestCountriesClient`] against `config.api_base_url`
///
/// The directory starts empty and in the loading state; send
/// [`Event::Mounted`] (or call `fetch_countries`) to load it.
///
/// # Errors
///
/// Returns [`ExplorerError::Http`] if the HTTP client cannot be built.
pub fn initialize(config: &Config, document: Arc<dyn DocumentRoot>) -> Result<AppContext> {
    tracing::debug!(api_base_url = %config.api_base_url, "initializing country explorer");

    let preferences_path = config.data_dir().join(paths::PREFERENCES_FILE);
    let store: Box<dyn PreferenceStore> = match JsonPreferenceStore::new(preferences_path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "preferences unavailable, theme will not persist");
            Box::new(MemoryPreferenceStore::default())
        }
    };

    let appearance: Box<dyn SystemAppearance> = match config.prefers_dark {
        Some(dark) => Box::new(FixedAppearance(Some(dark))),
        None => Box::new(EnvAppearance),
    };

    let theme = ThemePreference::initialize(store, appearance.as_ref(), document);

    let source = RestCountriesClient::new(config.api_base_url.clone(), config.request_timeout())?;
    let directory = DirectoryStore::new(Arc::new(source), config.directory_options());

    Ok(AppContext::new(theme, directory))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_directory_constants() {
        let config = Config::default();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.load_more_delay(), Duration::from_millis(500));
        assert_eq!(config.api_base_url, "https://restcountries.com/v3.1");
    }

    #[test]
    fn toml_rejects_mistyped_values() {
        let err = Config::from_toml_str("page_size = \"many\"").unwrap_err();
        assert!(matches!(err, ExplorerError::Config(_)));
    }

    #[test]
    fn toml_reads_every_field() {
        let config = Config::from_toml_str(
            r#"
            api_base_url = "http://localhost:8080"
            request_timeout_secs = 3
            load_more_delay_ms = 0
            page_size = 6
            locale = "ch"
            data_dir = "/tmp/explorer"
            trace_level = "debug"
            prefers_dark = false
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.load_more_delay(), Duration::ZERO);
        assert_eq!(config.page_size, 6);
        assert_eq!(config.locale, NumberLocale::Ch);
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/explorer"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.prefers_dark, Some(false));
    }

    #[test]
    fn map_falls_back_on_bad_values() {
        let map: BTreeMap<String, String> = [
            ("page_size", "0"),
            ("load_more_delay_ms", "soon"),
            ("locale", "xx"),
            ("prefers_dark", "maybe"),
            ("api_base_url", "  "),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert_eq!(Config::from_map(&map), Config::default());
    }

    #[test]
    fn map_parses_valid_values() {
        let map: BTreeMap<String, String> = [
            ("api_base_url", "http://127.0.0.1:9000"),
            ("locale", "de-DE"),
            ("load_more_delay_ms", "50"),
            ("trace_level", "warn"),
            ("prefers_dark", "light"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.locale, NumberLocale::De);
        assert_eq!(config.load_more_delay_ms, 50);
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
        assert_eq!(config.prefers_dark, Some(false));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explorer.toml");
        std::fs::write(&path, "trace_level = \"trace\"").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.trace_level.as_deref(), Some("trace"));
        assert!(matches!(
            Config::from_file(dir.path().join("missing.toml")),
            Err(ExplorerError::Io(_))
        ));
    }
}
