//! # tb-core
//!
//! Centralized configuration for Team Brain tools.
//!
//! This crate provides:
//! - Loading a JSON configuration file, seeding it with defaults on first use
//! - Dot-notation `get`/`set` over nested mappings
//! - Typed accessors for the `paths`, `agents`, and `settings` sections
//! - Validation and persistence
//!
//! ## Modules
//!
//! - [`config`]: The configuration store and its building blocks

pub mod config;

pub use config::{ConfigError, ConfigResult, ConfigStore};
