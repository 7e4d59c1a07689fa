//! Error types for mimesniff.
//!
//! Classification itself never fails: every detector resolves to a type or to an
//! explicit "unrecognized" outcome. The errors defined here belong to the surfaces
//! around the detectors (reading files, loading configuration, rendering output).
//!
//! - `SniffError::Io` (from `std::io::Error`) always bubbles up unchanged
//! - `Validation` carries context such as the offending path or config value
//! - `Serialization` wraps JSON/TOML failures with their source preserved
//!
//! # Example
//!
//! ```rust
//! use mimesniff::{SniffError, Result};
//!
//! fn load(path: &str) -> Result<Vec<u8>> {
//!     let bytes = std::fs::read(path)?;
//!
//!     if bytes.is_empty() {
//!         return Err(SniffError::validation(format!("File is empty: {}", path)));
//!     }
//!
//!     Ok(bytes)
//! }
//! ```
use thiserror::Error;

/// Result type alias using `SniffError`.
pub type Result<T> = std::result::Result<T, SniffError>;

/// Main error type for the fallible operations around classification.
#[derive(Debug, Error)]
pub enum SniffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl From<serde_json::Error> for SniffError {
    fn from(err: serde_json::Error) -> Self {
        SniffError::serialization_with_source(err.to_string(), err)
    }
}

impl From<toml::de::Error> for SniffError {
    fn from(err: toml::de::Error) -> Self {
        SniffError::serialization_with_source(err.to_string(), err)
    }
}

macro_rules! error_constructor {
    ($name:ident, $with_source:ident, $variant:ident) => {
        #[doc = concat!("Create a ", stringify!($variant), " error")]
        pub fn $name<S: Into<String>>(message: S) -> Self {
            Self::$variant {
                message: message.into(),
                source: None,
            }
        }

        #[doc = concat!("Create a ", stringify!($variant), " error with source")]
        pub fn $with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
            message: S,
            source: E,
        ) -> Self {
            Self::$variant {
                message: message.into(),
                source: Some(Box::new(source)),
            }
        }
    };
}

impl SniffError {
    error_constructor!(validation, validation_with_source, Validation);

    /// Create a Serialization error with source
    pub fn serialization_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
