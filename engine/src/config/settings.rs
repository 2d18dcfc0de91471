// Engine settings: where entries are persisted and which slots hold them.
// Loaded from an optional JSON file, then environment overrides.
use anyhow::Context;
use serde::Deserialize;
use shared::models::Window;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

use crate::error::EngineResult;

pub const DATA_DIR_ENV: &str = "FITTRACK_DATA_DIR";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    /// Directory holding one JSON file per storage slot.
    pub data_dir: PathBuf,
    pub storage_key: String,
    /// Older slot migrated into `storage_key` on first load.
    pub legacy_storage_key: String,
    pub default_window: Window,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            data_dir: default_data_dir(),
            storage_key: "ft_entries_v2".to_string(),
            legacy_storage_key: "ft_entries_v1".to_string(),
            default_window: Window::All,
        }
    }
}

const APP_NAME: &str = "fittrack";

// `$XDG_DATA_HOME/fittrack`, usually `~/.local/share/fittrack`.
fn default_data_dir() -> PathBuf {
    match BaseDirectories::with_prefix(APP_NAME) {
        Ok(dirs) => dirs.get_data_home(),
        Err(e) => {
            tracing::warn!(error = %e, "No XDG data home, storing entries in ./.fittrack");
            PathBuf::from(".fittrack")
        }
    }
}

impl EngineSettings {
    /// Reads settings from `path` when given (a missing file means defaults), then
    /// applies `FITTRACK_DATA_DIR` if set.
    pub fn load(path: Option<&Path>) -> EngineResult<Self> {
        let mut settings = match path {
            Some(p) if p.exists() => Self::from_file(p)?,
            Some(p) => {
                tracing::debug!(path = %p.display(), "Settings file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            settings.data_dir = PathBuf::from(dir);
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> EngineResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let settings: EngineSettings = serde_json::from_str(&raw)
            .with_context(|| format!("parsing settings file {}", path.display()))?;
        Ok(settings)
    }

    fn validate(&self) -> EngineResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(crate::error::EngineError::ConfigError(
                "storage_key must not be empty".to_string(),
            ));
        }
        if self.storage_key == self.legacy_storage_key {
            return Err(crate::error::EngineError::ConfigError(
                "storage_key and legacy_storage_key must differ".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.storage_key, "ft_entries_v2");
        assert_eq!(settings.legacy_storage_key, "ft_entries_v1");
        assert_eq!(settings.default_window, Window::All);
        assert!(settings.data_dir.ends_with("fittrack") || settings.data_dir.ends_with(".fittrack"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "data_dir": "/tmp/ft", "default_window": "30" }}"#).unwrap();
        let settings = EngineSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/ft"));
        assert_eq!(settings.default_window, Window::Days(30));
        assert_eq!(settings.storage_key, "ft_entries_v2");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        assert!(EngineSettings::from_file(file.path()).is_err());
    }

    #[test]
    fn test_same_slot_keys_rejected() {
        let settings = EngineSettings {
            legacy_storage_key: "ft_entries_v2".to_string(),
            ..EngineSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
