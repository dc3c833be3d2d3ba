//! The configuration store.
//!
//! A `ConfigStore` owns one configuration document in memory, mirrored to one
//! JSON file on disk. Reads go through dot-path keys or the typed section
//! accessors; writes only touch memory until [`ConfigStore::save`] is called.

use crate::config::defaults::{default_config_path, default_document};
use crate::config::dot_path;
use crate::config::error::{ConfigError, ConfigResult};
use crate::config::loader::{load_document, write_document};
use crate::config::validate::validate_document;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tb_protocol::agent_models::{AgentConfig, UNKNOWN_FIELD};
use tb_protocol::config_models::{ConfigDocument, Section};

/// Centralized configuration for Team Brain tools.
///
/// # Example
///
/// ```rust,no_run
/// use tb_core::config::store::ConfigStore;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut config = ConfigStore::open("/tmp/team_brain.json")?;
///
/// let synapse = config.get_path("synapse")?;
/// let atlas = config.get_agent("ATLAS");
/// let poll = config.get_setting("default_poll_interval");
///
/// config.set_path("synapse", "/new/path")?;
/// config.save()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// File the document is loaded from and saved to.
    path: PathBuf,

    /// In-memory document.
    doc: ConfigDocument,
}

impl ConfigStore {
    /// Open the store backed by `path`.
    ///
    /// If the file does not exist it is created with the built-in defaults.
    /// A corrupted file is loaded as defaults and left untouched.
    pub fn open(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        let doc = load_document(&path)?;
        Ok(Self { path, doc })
    }

    /// Open the store backed by the default config file location.
    pub fn open_default() -> ConfigResult<Self> {
        Self::open(default_config_path())
    }

    /// Discard in-memory changes and load the file again.
    pub fn reload(&mut self) -> ConfigResult<()> {
        self.doc = load_document(&self.path)?;
        Ok(())
    }

    /// Write the in-memory document to the backing file.
    pub fn save(&self) -> ConfigResult<()> {
        write_document(&self.path, &self.doc)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw in-memory document.
    pub fn document(&self) -> &ConfigDocument {
        &self.doc
    }

    /// Get any value by dot-notation key (e.g. `paths.synapse` or
    /// `agents.ATLAS.model`).
    pub fn get(&self, key: &str) -> Option<&Value> {
        dot_path::lookup(&self.doc, key)
    }

    /// Get a value by dot-notation key, or `default` if it is absent.
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Set a value by dot-notation key, creating intermediate mappings.
    ///
    /// The change is not persisted until [`save`](Self::save) is called.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> ConfigResult<()> {
        dot_path::assign(&mut self.doc, key, value.into())
    }

    /// Remove the value at a dot-notation key, returning it if it existed.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        dot_path::detach(&mut self.doc, key)
    }

    /// Get a named path from the `paths` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PathNotFound`] if the entry is absent, empty, or
    /// not a string.
    pub fn get_path(&self, name: &str) -> ConfigResult<PathBuf> {
        self.get(&section_key(Section::Paths, name))
            .and_then(Value::as_str)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::PathNotFound(name.to_string()))
    }

    /// Set a named path in the `paths` section.
    pub fn set_path(&mut self, name: &str, path: impl Into<String>) -> ConfigResult<()> {
        self.set(&section_key(Section::Paths, name), path.into())
    }

    /// Get the descriptor of an agent.
    ///
    /// Returns `None` if the agent is not configured. Missing `model` and
    /// `role` fields read as `"unknown"`; missing capabilities as an empty
    /// list.
    pub fn get_agent(&self, name: &str) -> Option<AgentConfig> {
        let fields = self
            .get(&section_key(Section::Agents, name))?
            .as_object()
            .filter(|f| !f.is_empty())?;

        let text = |field: &str| {
            fields
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_FIELD)
                .to_string()
        };

        let capabilities = fields
            .get("capabilities")
            .and_then(Value::as_array)
            .map(|caps| {
                caps.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(AgentConfig {
            model: text("model"),
            role: text("role"),
            capabilities,
        })
    }

    /// Replace the descriptor of an agent.
    pub fn set_agent(&mut self, name: &str, agent: &AgentConfig) -> ConfigResult<()> {
        let value = serde_json::json!({
            "model": agent.model,
            "role": agent.role,
            "capabilities": agent.capabilities,
        });
        self.set(&section_key(Section::Agents, name), value)
    }

    /// Get a value from the `settings` section.
    pub fn get_setting(&self, name: &str) -> Option<&Value> {
        self.get(&section_key(Section::Settings, name))
    }

    /// Set a value in the `settings` section.
    pub fn set_setting(&mut self, name: &str, value: impl Into<Value>) -> ConfigResult<()> {
        self.set(&section_key(Section::Settings, name), value)
    }

    /// All configured agents, keyed by name.
    pub fn list_agents(&self) -> Map<String, Value> {
        self.section(Section::Agents)
    }

    /// Names of all configured agents, in document order.
    pub fn agent_names(&self) -> Vec<String> {
        match self.get(Section::Agents.key()) {
            Some(Value::Object(agents)) => agents.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// All configured paths, keyed by name.
    pub fn list_paths(&self) -> Map<String, Value> {
        self.section(Section::Paths)
    }

    /// All settings, keyed by name.
    pub fn list_settings(&self) -> Map<String, Value> {
        self.section(Section::Settings)
    }

    /// Validate the document.
    ///
    /// Returns a list of validation errors, empty if the document is valid.
    pub fn validate(&self) -> Vec<String> {
        validate_document(&self.doc)
    }

    /// Replace the document with the built-in defaults and save it.
    pub fn reset_to_defaults(&mut self) -> ConfigResult<()> {
        self.doc = default_document();
        self.save()
    }

    fn section(&self, section: Section) -> Map<String, Value> {
        match self.get(section.key()) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }
}

fn section_key(section: Section, name: &str) -> String {
    format!("{}.{name}", section.key())
}
