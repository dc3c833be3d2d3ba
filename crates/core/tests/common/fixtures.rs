//! Test fixtures for creating sample configuration files.

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory with the path of a config file inside it.
///
/// The file itself is not created. Keep the returned `TempDir` alive for the
/// duration of the test.
pub fn config_location() -> std::io::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("TEAM_BRAIN_CONFIG.json");
    Ok((temp_dir, path))
}

/// A temporary config file with the given raw content.
pub fn config_file_with(content: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let (temp_dir, path) = config_location()?;
    std::fs::write(&path, content)?;
    Ok((temp_dir, path))
}

/// A hand-written config where one agent is missing its model.
pub const PARTIAL_AGENTS_CONFIG: &str = r#"{
  "version": "1.0.0",
  "paths": { "beacon_hq": "/srv/beacon" },
  "agents": {
    "ATLAS": { "model": "sonnet-4.5", "role": "builder", "capabilities": ["testing"] },
    "DRIFT": { "role": "wanderer" }
  },
  "settings": { "max_retries": 5 }
}
"#;
