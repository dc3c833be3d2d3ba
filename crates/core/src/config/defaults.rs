//! Built-in default configuration.
//!
//! A fresh store is seeded with these values when its file does not exist,
//! when the file cannot be parsed, and on `reset_to_defaults`.

use serde_json::{json, Value};
use std::path::Path;
use tb_protocol::config_models::ConfigDocument;

/// Version of the config manager and of the documents it writes.
pub const VERSION: &str = "1.0.0";

/// Default location of the shared configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "D:/BEACON_HQ/TEAM_BRAIN_CONFIG.json";

/// Returns the default configuration file path.
pub fn default_config_path() -> &'static Path {
    Path::new(DEFAULT_CONFIG_FILE)
}

/// Returns a fresh copy of the built-in default document.
pub fn default_document() -> ConfigDocument {
    let value = json!({
        "version": VERSION,
        "paths": {
            "synapse": "D:/BEACON_HQ/MEMORY_CORE_V2/03_INTER_AI_COMMS/THE_SYNAPSE/active",
            "memory_bridge_db": "D:/BEACON_HQ/MEMORY_CORE_V2/00_SHARED_MEMORY/memory_bridge.db",
            "task_queue_db": "D:/BEACON_HQ/TASK_QUEUE/taskqueue.db",
            "memory_core": "D:/BEACON_HQ/MEMORY_CORE_V2",
            "beacon_hq": "D:/BEACON_HQ"
        },
        "agents": {
            "ATLAS": {
                "model": "sonnet-4.5",
                "role": "builder",
                "capabilities": ["tool_creation", "testing", "documentation"]
            },
            "FORGE": {
                "model": "opus-4.5",
                "role": "orchestrator",
                "capabilities": ["planning", "architecture", "review"]
            },
            "CLIO": {
                "model": "sonnet-4.5",
                "role": "linux-specialist",
                "capabilities": ["system_admin", "deployment", "automation"]
            },
            "BOLT": {
                "model": "grok",
                "role": "executor",
                "capabilities": ["code_execution", "testing", "quick_tasks"]
            },
            "NEXUS": {
                "model": "sonnet-4.5",
                "role": "tester",
                "capabilities": ["comprehensive_testing", "qa", "validation"]
            }
        },
        "settings": {
            "default_poll_interval": 1.0,
            "max_retries": 3,
            "timeout_seconds": 30,
            "log_level": "INFO"
        }
    });

    match value {
        Value::Object(map) => map,
        _ => ConfigDocument::new(),
    }
}
