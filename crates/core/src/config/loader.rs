//! Reading and writing the JSON configuration file.
//!
//! Loading never fails on bad content: a file that is not a JSON object is
//! reported with a warning and replaced in memory by the built-in defaults.
//! The file itself is left as it is so it can be inspected or repaired.

use crate::config::defaults::default_document;
use crate::config::error::{ConfigError, ConfigResult};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tb_protocol::config_models::ConfigDocument;
use tracing::{debug, info, warn};

/// Loads the configuration document stored at `path`.
///
/// - If the file exists and holds a JSON object, that object is returned.
/// - If the file exists but cannot be parsed, a warning is logged and the
///   defaults are returned without touching the file.
/// - If the file does not exist, the defaults are written to it (creating
///   parent directories) and returned.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read, or if the
/// defaults cannot be written for a first-time load.
///
/// # Example
///
/// ```rust,no_run
/// use tb_core::config::loader::load_document;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let doc = load_document(Path::new("/tmp/team_brain.json"))?;
/// println!("Loaded {} top-level keys", doc.len());
/// # Ok(())
/// # }
/// ```
pub fn load_document(path: &Path) -> ConfigResult<ConfigDocument> {
    if !path.exists() {
        let doc = default_document();
        write_document(path, &doc)?;
        info!(path = %path.display(), "created config file with defaults");
        return Ok(doc);
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(doc)) => {
            debug!(path = %path.display(), keys = doc.len(), "loaded config");
            Ok(doc)
        }
        Ok(other) => {
            warn!(
                path = %path.display(),
                found = json_kind(&other),
                "config file is not a JSON object, using defaults"
            );
            Ok(default_document())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config file corrupted, using defaults");
            Ok(default_document())
        }
    }
}

/// Serializes `doc` as indented JSON and overwrites the file at `path`.
///
/// Parent directories are created if they do not exist. The write is not
/// atomic.
pub fn write_document(path: &Path, doc: &ConfigDocument) -> ConfigResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut json = serde_json::to_string_pretty(doc).map_err(|source| ConfigError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    json.push('\n');

    fs::write(path, json).map_err(|source| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "saved config");
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
