//! Filesystem locations for persisted state and logs.

use std::path::PathBuf;

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "country-explorer";

/// File name of the JSON preference store.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// File name of the rotating log file.
pub const LOG_FILE: &str = "country-explorer.log";

/// Returns the default data directory.
///
/// Resolves to the platform data directory (e.g. `~/.local/share/country-explorer`
/// on Linux). Falls back to a relative `.country-explorer` directory when the
/// platform reports none.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR_NAME}")),
        |dir| dir.join(APP_DIR_NAME),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and every path when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use country_explorer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(path),
    }
}
