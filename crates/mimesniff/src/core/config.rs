//! Configuration loading and management.
//!
//! Detection itself takes no configuration. These settings govern the surfaces around it:
//! how large an input may be before it is read, and which detector family a caller
//! consults by default.

use crate::detection::Family;
use crate::{Result, SniffError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for by [`SniffConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "mimesniff.toml";

/// Default input size cap: 64 MiB.
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 64 * 1024 * 1024;

/// Main configuration.
///
/// # Example
///
/// ```rust
/// use mimesniff::core::config::SniffConfig;
/// use mimesniff::Family;
///
/// let config = SniffConfig::default();
/// assert_eq!(config.family, Family::Auto);
///
/// // let config = SniffConfig::from_toml_file("mimesniff.toml")?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SniffConfig {
    /// Largest input, in bytes, that will be read for classification.
    ///
    /// Archive introspection is bounded only by the archive itself, so untrusted input
    /// should be capped before it reaches the detectors.
    #[serde(default = "default_max_input_size")]
    pub max_input_size: u64,

    /// Detector family used when the caller does not name one.
    #[serde(default)]
    pub family: Family,
}

fn default_max_input_size() -> u64 {
    DEFAULT_MAX_INPUT_SIZE
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            family: Family::default(),
        }
    }
}

impl SniffConfig {
    /// Reject settings that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.max_input_size == 0 {
            return Err(SniffError::validation("max_input_size must be greater than zero"));
        }

        Ok(())
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SniffError::validation_with_source(format!("Failed to read config file {}", path.as_ref().display()), e)
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            SniffError::serialization_with_source(format!("Invalid TOML in {}: {}", path.as_ref().display(), e), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SniffError::validation_with_source(format!("Failed to read config file {}", path.as_ref().display()), e)
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            SniffError::serialization_with_source(format!("Invalid JSON in {}: {}", path.as_ref().display(), e), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, choosing the format by extension (`.json` or TOML).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_file(path)
        } else {
            Self::from_toml_file(path)
        }
    }

    /// Discover `mimesniff.toml` in the current directory or any parent.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let current = std::env::current_dir().map_err(SniffError::Io)?;
        Self::discover_from(&current)
    }

    /// Discover `mimesniff.toml` starting at `start` and walking up to the root.
    pub fn discover_from(start: &Path) -> Result<Option<Self>> {
        for dir in start.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                tracing::debug!("Using configuration from {}", candidate.display());
                return Ok(Some(Self::from_toml_file(candidate)?));
            }
        }

        Ok(None)
    }
}
