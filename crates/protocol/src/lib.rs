//! # tb-protocol
//!
//! Shared data models for the Team Brain configuration manager.
//!
//! This crate defines the structures that describe a configuration document:
//! - The untyped [`ConfigDocument`] tree persisted as JSON
//! - The fixed set of required [`Section`]s
//! - Typed descriptors stored inside sections, such as [`AgentConfig`]
//!
//! ## Modules
//!
//! - [`agent_models`]: Agent descriptors from the `agents` section
//! - [`config_models`]: Document alias and section names
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, serde_json, and ts-rs
//! - TypeScript generation: Descriptor types derive `TS` for client compatibility
//! - Independent compilation: No dependencies on other workspace crates

pub mod agent_models;
pub mod config_models;

// Re-export all public types for convenience
pub use agent_models::*;
pub use config_models::*;
