//! Writer settings persistence
//!
//! Records the last-used writer mode and its options in
//! `~/.gemini/writer-settings.json`. The document is merged rather than
//! replaced so fields written by other tools survive. Persistence is
//! advisory: the active mode lives in [`crate::mode::ModeState`].

use crate::env::Env;
use crate::error::SettingsError;
use crate::mode::{Mode, OptionSet};
use crate::paths;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the settings document inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "writer-settings.json";

/// The fields this crate owns in the settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSettings {
    /// Last mode switched to.
    pub current_mode: Mode,
    /// Options the mode was switched with.
    #[serde(default)]
    pub mode_options: OptionSet,
    /// When the document was last written.
    pub last_updated: DateTime<Utc>,
}

/// Reads and writes the settings document at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by an explicit file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.gemini/writer-settings.json` for the snapshot's home.
    #[must_use]
    pub fn from_env(env: &Env) -> Self {
        let home = env.home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(paths::config_dir(&home).join(SETTINGS_FILE_NAME))
    }

    /// Get the settings file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted mode, if a readable document exists.
    #[must_use]
    pub fn load(&self) -> Option<PersistedSettings> {
        if !self.path.exists() {
            debug!("Writer settings file not found");
            return None;
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    warn!("Failed to parse writer settings file: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read writer settings file: {}", e);
                None
            }
        }
    }

    /// Record `mode` and `options` with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be read or the document
    /// cannot be written. Callers are expected to log and continue.
    pub fn persist(&self, mode: Mode, options: &OptionSet) -> Result<PathBuf, SettingsError> {
        self.persist_at(mode, options, Utc::now())
    }

    /// Record `mode` and `options` with an explicit timestamp.
    ///
    /// A missing, malformed or non-object document is replaced by a fresh one;
    /// other top-level fields of an existing object are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be read or the document
    /// cannot be written.
    pub fn persist_at(
        &self,
        mode: Mode,
        options: &OptionSet,
        now: DateTime<Utc>,
    ) -> Result<PathBuf, SettingsError> {
        let mut document = self.read_document()?;
        document.insert(
            "currentMode".to_string(),
            Value::String(mode.name().to_string()),
        );
        document.insert("modeOptions".to_string(), serde_json::to_value(options)?);
        document.insert(
            "lastUpdated".to_string(),
            Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(&Value::Object(document))?;
        fs::write(&self.path, content).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), mode = %mode, "Saved writer settings");
        Ok(self.path.clone())
    }

    fn read_document(&self) -> Result<Map<String, Value>, SettingsError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;
        match serde_json::from_str(&content) {
            Ok(Value::Object(document)) => Ok(document),
            Ok(_) => {
                debug!("Writer settings file is not a JSON object, starting fresh");
                Ok(Map::new())
            }
            Err(e) => {
                debug!("Ignoring malformed writer settings file: {}", e);
                Ok(Map::new())
            }
        }
    }
}
