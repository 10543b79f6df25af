use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Theme;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// User preferences persisted between sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_theme_is_lowercase() {
        let settings = Settings { theme: Theme::Dark };
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"theme\": \"dark\""));
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{\"theme\": \"sepia\"}").is_err());
        assert!(Settings::from_json("not json").is_err());
    }
}
