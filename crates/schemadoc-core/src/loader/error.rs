//! Error types for schema and excerpt loading
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised while reading input from disk or memory
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File I/O errors
    #[error("Failed to read '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },

    /// The document parsed but is not a schema object
    #[error("Invalid schema root in '{path}': {reason}")]
    InvalidRoot { path: PathBuf, reason: String },
}

impl From<std::io::Error> for LoaderError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::from("<unknown>"),
            source: error,
        }
    }
}

impl LoaderError {
    /// Create an I/O error with path context
    pub fn io_error(path: impl AsRef<Path>, error: std::io::Error) -> Self {
        Self::IoError {
            path: path.as_ref().to_path_buf(),
            source: error,
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: impl AsRef<Path>, error: serde_yaml::Error) -> Self {
        Self::YamlParseError {
            path: path.as_ref().to_path_buf(),
            source: error,
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: impl AsRef<Path>, error: serde_json::Error) -> Self {
        Self::JsonParseError {
            path: path.as_ref().to_path_buf(),
            source: error,
        }
    }

    pub fn unsupported_format(path: impl AsRef<Path>) -> Self {
        Self::UnsupportedFormat {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn invalid_root(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::InvalidRoot {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Get the path associated with this error
    pub fn path(&self) -> &Path {
        match self {
            Self::IoError { path, .. }
            | Self::YamlParseError { path, .. }
            | Self::JsonParseError { path, .. }
            | Self::UnsupportedFormat { path }
            | Self::InvalidRoot { path, .. } => path,
        }
    }
}
