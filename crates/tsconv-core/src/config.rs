//! User configuration.
//!
//! Settings are read from an optional JSON file. Without an explicit path the
//! file is looked up as `$XDG_CONFIG_HOME/tsconv/config.json`; a missing
//! default file simply yields the defaults.
//!
//! ```json
//! { "timezone": "Asia/Shanghai", "unit": "s", "locale": "zh-CN" }
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigResultExt, ConvertError, Result},
    locale::Locale,
    models::TimestampUnit,
};

/// Persistent user preferences. Every field is optional in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Zone preselected in the panel instead of the user's zone
    pub timezone: Option<String>,
    /// Unit preselected in the panel and used by CLI commands
    pub unit: TimestampUnit,
    /// Output locale
    pub locale: Locale,
}

impl Config {
    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::FileSystem` if an explicit path cannot be read
    /// and `ConvertError::Configuration` if the file is not valid JSON for
    /// this structure.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    debug!("No configuration file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        Self::from_file(&path)
    }

    /// Reads and parses a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ConvertError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_json(&text)
            .config_context(&format!("invalid configuration in {}", path.display()))
    }

    /// Parses configuration JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Existing default configuration file, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("tsconv").find_config_file("config.json")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{ "timezone": "Asia/Tokyo" }"#).unwrap();
        assert_eq!(config.timezone.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(config.unit, TimestampUnit::Milliseconds);
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_from_json_full() {
        let config =
            Config::from_json(r#"{ "timezone": "UTC", "unit": "s", "locale": "zh-CN" }"#)
                .unwrap();
        assert_eq!(config.unit, TimestampUnit::Seconds);
        assert_eq!(config.locale, Locale::ZhCn);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, r#"{{ "unit": "s" }}"#).unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.unit, TimestampUnit::Seconds);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert!(matches!(err, ConvertError::FileSystem { .. }));
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, r#"{{ "unit": "fortnights" }}"#).unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConvertError::Configuration { .. }));
    }
}
