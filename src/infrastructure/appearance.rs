//! System appearance signal and document-root presentation marker.
//!
//! The theme preference consults a [`SystemAppearance`] once at startup when no
//! preference has been persisted, and drives a [`DocumentRoot`] marker class so
//! downstream styling can react to the current mode.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Class applied to the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Environment variable set by many terminals as `foreground;background`.
const COLORFGBG_VAR: &str = "COLORFGBG";

/// Read-only system query for a dark-mode preference.
pub trait SystemAppearance: Send + Sync {
    /// Returns `Some(true)` when the system prefers dark, `Some(false)` when it
    /// prefers light, and `None` when there is no signal.
    fn prefers_dark(&self) -> Option<bool>;
}

/// A fixed answer, used for configuration overrides and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAppearance(pub Option<bool>);

impl SystemAppearance for FixedAppearance {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Reads the terminal background hint from `COLORFGBG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvAppearance;

impl SystemAppearance for EnvAppearance {
    fn prefers_dark(&self) -> Option<bool> {
        let value = std::env::var(COLORFGBG_VAR).ok()?;
        let prefers_dark = parse_colorfgbg(&value);
        tracing::debug!(value = %value, prefers_dark = ?prefers_dark, "read system appearance");
        prefers_dark
    }
}

/// Interprets a `COLORFGBG` value.
///
/// The background is the last `;`-separated field. ANSI colors 0-6 and 8 are
/// dark backgrounds; anything else numeric is light. `default` or garbage
/// yields `None`.
#[must_use]
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(background, 0..=6 | 8))
}

/// The root element whose class list carries the presentation marker.
pub trait DocumentRoot: Send + Sync {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// In-memory class list.
///
/// Cloning yields another handle to the same set, so a renderer can hold one
/// handle while the theme preference holds another.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    classes: Arc<Mutex<BTreeSet<String>>>,
}

impl ClassList {
    /// Snapshot of the current classes in sorted order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

impl DocumentRoot for ClassList {
    fn add_class(&self, class: &str) {
        self.classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorfgbg_background_classification() {
        assert_eq!(parse_colorfgbg("15;0"), Some(true));
        assert_eq!(parse_colorfgbg("0;15"), Some(false));
        assert_eq!(parse_colorfgbg("15;default;8"), Some(true));
        assert_eq!(parse_colorfgbg("15;default"), None);
        assert_eq!(parse_colorfgbg(""), None);
    }

    #[test]
    fn class_list_handles_share_state() {
        let root = ClassList::default();
        let other = root.clone();

        root.add_class(DARK_CLASS);
        assert!(other.has_class(DARK_CLASS));
        assert_eq!(other.classes(), vec![DARK_CLASS.to_string()]);

        other.remove_class(DARK_CLASS);
        assert!(!root.has_class(DARK_CLASS));
    }
}
