//! Persisted user settings, stored as JSON in the config directory.

use std::fs;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nav::Route;
use crate::paths;
use crate::theme::ThemeVariant;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("config directory could not be determined")]
    NoConfigDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeVariant,
    pub last_route: Route,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::Dark,
            last_route: Route::Dashboard,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when the file is missing.
    /// A malformed file is logged and replaced with defaults rather than
    /// aborting startup.
    pub fn load() -> Self {
        let Some(path) = paths::settings_file() else {
            return Self::default();
        };
        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("ignoring malformed settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        let path = paths::settings_file().ok_or(SettingsError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.last_route, Route::Dashboard);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(back.last_route, Route::Dashboard);
    }
}
