//! JSON file-based preference backend.
//!
//! The whole document is held in memory and rewritten on every change using an
//! atomic write (write-to-temp + rename), so a crash never leaves a truncated
//! preferences file behind.

use crate::domain::error::{ExplorerError, Result};
use crate::storage::backend::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk container format.
///
/// ```json
/// {
///   "version": 1,
///   "values": { "theme": "dark" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Version of the storage format for future migrations.
    version: u32,

    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: 1,
            values: BTreeMap::new(),
        }
    }
}

/// JSON file preference store.
///
/// This type is `Send` but not `Sync`; it has a single owner (the theme
/// preference).
#[derive(Debug)]
pub struct JsonPreferenceStore {
    file_path: PathBuf,
    data: PreferenceData,
}

impl JsonPreferenceStore {
    /// Creates or opens a preference file.
    ///
    /// If the file exists its values are loaded, otherwise the store starts
    /// empty. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use country_explorer::storage::JsonPreferenceStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonPreferenceStore::new(PathBuf::from("/tmp/preferences.json"))?;
    /// # Ok::<(), country_explorer::ExplorerError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty preference store");
            PreferenceData::default()
        };

        Ok(Self { file_path, data })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceData = serde_json::from_str(&contents)
            .map_err(|e| ExplorerError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            keys = data.values.len(),
            "loaded preferences"
        );

        Ok(data)
    }

    /// Writes `next` to disk and adopts it only once the write succeeded.
    fn commit(&mut self, next: PreferenceData) -> Result<()> {
        Self::save_to_file(&self.file_path, &next)?;
        self.data = next;
        Ok(())
    }

    fn save_to_file(file_path: &Path, data: &PreferenceData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| ExplorerError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, file_path)?;

        tracing::trace!(path = ?file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key = %key, value = %value).entered();

        if self.data.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }

        let mut next = self.data.clone();
        next.values.insert(key.to_string(), value.to_string());
        self.commit(next)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.data.values.contains_key(key) {
            return Ok(());
        }

        let mut next = self.data.clone();
        next.values.remove(key);
        self.commit(next)
    }
}
