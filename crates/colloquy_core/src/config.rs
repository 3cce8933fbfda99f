//! Configuration loading.

use crate::JsonStyle;
use colloquy_error::{ColloquyResult, ConfigError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Library settings, usually read from a TOML file.
///
/// Every field has a default, so an empty file is a valid configuration.
///
/// # Examples
///
/// ```
/// use colloquy_core::{ColloquyConfig, JsonStyle};
///
/// let config = ColloquyConfig::from_toml_str(r#"json_style = "compact""#).unwrap();
/// assert_eq!(*config.json_style(), JsonStyle::Compact);
/// assert_eq!(config.log_filter(), "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[serde(default)]
#[builder(default, setter(into))]
pub struct ColloquyConfig {
    /// Layout used when encoding histories through the config
    json_style: JsonStyle,
    /// `tracing_subscriber` filter directive used when `RUST_LOG` is unset
    log_filter: String,
}

impl Default for ColloquyConfig {
    fn default() -> Self {
        Self {
            json_style: JsonStyle::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl ColloquyConfig {
    /// Returns a builder for constructing a config.
    pub fn builder() -> ColloquyConfigBuilder {
        ColloquyConfigBuilder::default()
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ColloquyResult<Self> {
        Ok(toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?)
    }

    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ColloquyResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> ColloquyResult<String> {
        Ok(toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))?)
    }
}
