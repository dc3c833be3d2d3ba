//! Configuration store and its supporting pieces.
//!
//! This module provides the JSON-backed [`store::ConfigStore`] together with
//! the built-in defaults, dot-path traversal, file I/O, and validation it is
//! built from.

pub mod defaults;
pub mod dot_path;
pub mod error;
pub mod loader;
pub mod store;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use store::ConfigStore;
