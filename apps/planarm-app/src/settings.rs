//! Persistence of last-used link lengths.
//!
//! The solver core never touches storage; the app owns a [`SettingsStore`]
//! capability and passes values in. The default implementation is a small
//! TOML file. Values are kept in centimeters, matching what the user typed.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const fn default_l1_cm() -> f64 {
    18.0
}
const fn default_l2_cm() -> f64 {
    20.0
}

/// Settings persistence errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML encode error: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Last-used link lengths, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmSettings {
    #[serde(default = "default_l1_cm")]
    pub l1_cm: f64,

    #[serde(default = "default_l2_cm")]
    pub l2_cm: f64,
}

impl Default for ArmSettings {
    fn default() -> Self {
        Self {
            l1_cm: default_l1_cm(),
            l2_cm: default_l2_cm(),
        }
    }
}

/// Storage capability for [`ArmSettings`].
pub trait SettingsStore {
    /// Load the stored settings, falling back to defaults when nothing has
    /// been saved yet.
    fn load(&self) -> Result<ArmSettings, SettingsError>;

    /// Persist the settings.
    fn save(&self, settings: &ArmSettings) -> Result<(), SettingsError>;
}

/// [`SettingsStore`] backed by a TOML file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<ArmSettings, SettingsError> {
        if !self.path.exists() {
            return Ok(ArmSettings::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&raw)?)
    }

    fn save(&self, settings: &ArmSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = toml::to_string_pretty(settings)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn temp_store(name: &str) -> FileSettingsStore {
        let path = std::env::temp_dir().join(format!(
            "planarm-settings-test-{}-{name}.toml",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        FileSettingsStore::new(path)
    }

    #[test]
    fn missing_file_loads_defaults() {
        let store = temp_store("defaults");
        let settings = store.load().unwrap();
        assert_relative_eq!(settings.l1_cm, 18.0);
        assert_relative_eq!(settings.l2_cm, 20.0);
    }

    #[test]
    fn save_then_load_roundtrip() {
        let store = temp_store("roundtrip");
        let settings = ArmSettings {
            l1_cm: 12.5,
            l2_cm: 30.0,
        };
        store.save(&settings).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, settings);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn partial_file_fills_missing_field_with_default() {
        let store = temp_store("partial");
        fs::write(store.path(), "l1_cm = 25.0\n").unwrap();
        let loaded = store.load().unwrap();
        assert_relative_eq!(loaded.l1_cm, 25.0);
        assert_relative_eq!(loaded.l2_cm, 20.0);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let store = temp_store("malformed");
        fs::write(store.path(), "l1_cm = \"not a number\"\n").unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        let _ = fs::remove_file(store.path());
    }
}
