//! Declarative logger configuration

use super::{error::Result, level::Level};
use serde::{Deserialize, Serialize};

/// Serializable subset of the logger options
///
/// # Example
///
/// ```
/// use handler_logger::{Level, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{"name": "app", "default_level": "WARN"}"#).unwrap();
/// assert_eq!(config.default_level, Level::Warn);
/// assert!(config.colors);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub default_level: Level,

    /// Colourise terminal output when the console sink supports it
    #[serde(default = "default_colors")]
    pub colors: bool,
}

fn default_colors() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: None,
            default_level: Level::Debug,
            colors: default_colors(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.default_level, Level::Debug);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let err = LoggerConfig::from_json(r#"{"default_level": "LOUD"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(LoggerConfig::from_json(r#"{"levle": "INFO"}"#).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = LoggerConfig {
            name: Some("svc".to_string()),
            default_level: Level::Error,
            colors: false,
        };
        let parsed = LoggerConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
