//! Controller configuration
//!
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! collection_key = "savedForms"
//! required_message = "This field is required"
//! storage_dir = "/var/lib/formkit"
//! log_filter = "info"
//! ```

use formkit_repository::DEFAULT_COLLECTION_KEY;
use formkit_validation::DEFAULT_REQUIRED_MESSAGE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid TOML for [`FormkitConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// formkit configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormkitConfig {
    /// Storage slot holding the saved-form collection
    pub collection_key: String,
    /// Message recorded for unanswered required fields
    pub required_message: String,
    /// Directory for the file backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for FormkitConfig {
    fn default() -> Self {
        Self {
            collection_key: DEFAULT_COLLECTION_KEY.to_string(),
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
            storage_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

impl FormkitConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With collection slot name
    #[must_use]
    pub fn with_collection_key(mut self, key: impl Into<String>) -> Self {
        self.collection_key = key.into();
        self
    }

    /// With required-field message
    #[must_use]
    pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    /// With file-backend directory
    #[must_use]
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] if the TOML is invalid
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Serialize configuration to TOML
    ///
    /// # Errors
    /// Returns [`ConfigError::Serialize`] if serialization fails
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = FormkitConfig::from_toml("").unwrap();
        assert_eq!(config, FormkitConfig::default());
        assert_eq!(config.collection_key, "savedForms");
    }

    #[test]
    fn partial_toml_overrides() {
        let config = FormkitConfig::from_toml(
            r#"
            required_message = "Required"
            storage_dir = "/tmp/forms"
            "#,
        )
        .unwrap();
        assert_eq!(config.required_message, "Required");
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/forms")));
        assert_eq!(config.collection_key, DEFAULT_COLLECTION_KEY);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = FormkitConfig::from_toml("collection_key = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_round_trip() {
        let config = FormkitConfig::new()
            .with_collection_key("drafts")
            .with_storage_dir("/srv/forms");
        let text = config.to_toml().unwrap();
        assert_eq!(FormkitConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FormkitConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
