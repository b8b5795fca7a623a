//! Light/dark color theme preference.
//!
//! [`ThemePreference`] holds a single dark-mode flag. It is seeded once from the
//! persisted preference, or from the system appearance when nothing was
//! persisted, and afterwards changes only through [`ThemePreference::toggle`]
//! or [`ThemePreference::set_dark`].
//!
//! The document-root marker is a reaction bound to the flag itself. It fires at
//! initialization and on every change, so no mutation path can forget to update
//! the document.

use crate::app::reactive::Signal;
use crate::infrastructure::appearance::{DocumentRoot, SystemAppearance, DARK_CLASS};
use crate::storage::{PreferenceStore, THEME_KEY};
use std::fmt;
use std::sync::Arc;

/// The two color modes and their persisted spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    #[must_use]
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Value written to the preference store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interprets a persisted value. Only `"dark"` means dark.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        Self::from_dark(value == "dark")
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dark-mode flag with persistence and a document-root reaction.
pub struct ThemePreference {
    is_dark: Signal<bool>,
    store: Box<dyn PreferenceStore>,
}

impl ThemePreference {
    /// Seeds the preference and binds the document marker.
    ///
    /// Priority: persisted value, then the system signal, then light. A failed
    /// read or an empty stored string is treated as "nothing persisted". The `dark` class is applied to
    /// `document` before this returns if the resulting mode is dark.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_explorer::app::ThemePreference;
    /// use country_explorer::infrastructure::{ClassList, DocumentRoot, FixedAppearance};
    /// use country_explorer::storage::MemoryPreferenceStore;
    /// use std::sync::Arc;
    ///
    /// let document = ClassList::default();
    /// let theme = ThemePreference::initialize(
    ///     Box::new(MemoryPreferenceStore::default()),
    ///     &FixedAppearance(Some(true)),
    ///     Arc::new(document.clone()),
    /// );
    /// assert!(theme.is_dark());
    /// assert!(document.has_class("dark"));
    /// ```
    pub fn initialize(
        store: Box<dyn PreferenceStore>,
        appearance: &dyn SystemAppearance,
        document: Arc<dyn DocumentRoot>,
    ) -> Self {
        let stored = store.get(THEME_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to read theme preference, ignoring");
            None
        });

        let is_dark = stored.as_deref().filter(|value| !value.is_empty()).map_or_else(
            || appearance.prefers_dark().unwrap_or(false),
            |value| ColorMode::from_stored(value) == ColorMode::Dark,
        );

        tracing::debug!(
            stored = ?stored,
            is_dark = is_dark,
            "theme preference initialized"
        );

        let mut signal = Signal::new(is_dark);
        signal.watch_immediate(move |&dark| {
            if dark {
                document.add_class(DARK_CLASS);
            } else {
                document.remove_class(DARK_CLASS);
            }
        });

        Self {
            is_dark: signal,
            store,
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        *self.is_dark.get()
    }

    #[must_use]
    pub fn mode(&self) -> ColorMode {
        ColorMode::from_dark(self.is_dark())
    }

    /// Flips the mode and persists it. Returns the new `is_dark`.
    pub fn toggle(&mut self) -> bool {
        let next = !self.is_dark();
        self.apply(next);
        next
    }

    /// Selects a mode explicitly. Choosing the current mode does nothing.
    pub fn set_dark(&mut self, is_dark: bool) {
        if is_dark != self.is_dark() {
            self.apply(is_dark);
        }
    }

    fn apply(&mut self, is_dark: bool) {
        let _span = tracing::debug_span!("apply_theme", is_dark = is_dark).entered();

        self.is_dark.set(is_dark);

        let mode = ColorMode::from_dark(is_dark);
        if let Err(e) = self.store.set(THEME_KEY, mode.as_str()) {
            tracing::warn!(error = %e, mode = %mode, "failed to persist theme preference");
        }
    }
}

impl fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreference")
            .field("is_dark", &self.is_dark())
            .finish_non_exhaustive()
    }
}
