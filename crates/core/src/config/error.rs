//! Error types for the configuration store.
//!
//! This module defines all errors that can occur while loading, mutating,
//! and persisting a configuration document.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration store operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file from disk.
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a configuration file to disk.
    #[error("Failed to write config file at {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the directory holding the configuration file.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize the document to JSON.
    #[error("Failed to serialize config for {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A named path is absent from the `paths` section.
    #[error("Path '{0}' not found in config")]
    PathNotFound(String),

    /// A dot-path key is empty or contains an empty segment.
    #[error("Invalid config key '{0}': segments must not be empty")]
    InvalidKey(String),

    /// An intermediate segment of a dot-path holds a non-mapping value.
    #[error("Cannot set '{key}': '{segment}' is not a mapping")]
    NotAMapping { key: String, segment: String },
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
