//! Agent descriptor models for the `agents` section.
//!
//! Each entry under `agents` maps an agent name (e.g. `ATLAS`) to a
//! descriptor with the model it runs on, its role on the team, and a list of
//! capabilities.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Fallback used for a descriptor field that is absent from the document.
pub const UNKNOWN_FIELD: &str = "unknown";

/// Configuration for a single agent.
///
/// # Example
///
/// ```json
/// "ATLAS": {
///   "model": "sonnet-4.5",
///   "role": "builder",
///   "capabilities": ["tool_creation", "testing", "documentation"]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AgentConfig {
    /// Model the agent runs on (e.g. "sonnet-4.5", "opus-4.5").
    pub model: String,

    /// Role of the agent within the team (e.g. "builder", "orchestrator").
    pub role: String,

    /// Ordered list of capability tags.
    ///
    /// Defaults to an empty list if not specified.
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl AgentConfig {
    /// Build a descriptor from borrowed parts.
    pub fn new(model: &str, role: &str, capabilities: &[&str]) -> Self {
        Self {
            model: model.to_string(),
            role: role.to_string(),
            capabilities: capabilities.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}
