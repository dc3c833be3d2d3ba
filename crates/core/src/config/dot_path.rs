//! Dot-notation traversal over a configuration document.
//!
//! A key such as `agents.ATLAS.model` names a walk through nested mappings,
//! one `.`-separated segment at a time.

use crate::config::error::{ConfigError, ConfigResult};
use serde_json::{Map, Value};
use tb_protocol::config_models::ConfigDocument;

/// Splits a dot-path into its segments.
///
/// Rejects empty keys and keys with empty segments (`a..b`, `.a`, `a.`).
pub fn segments(key: &str) -> ConfigResult<Vec<&str>> {
    let parts: Vec<&str> = key.split('.').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::InvalidKey(key.to_string()));
    }
    Ok(parts)
}

/// Looks up the value at `key`.
///
/// Returns `None` as soon as a segment is missing or the value reached so far
/// is not a mapping.
pub fn lookup<'a>(doc: &'a ConfigDocument, key: &str) -> Option<&'a Value> {
    let mut parts = key.split('.');
    let mut current = doc.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Assigns `value` at `key`, creating intermediate mappings as needed.
///
/// An existing intermediate value that is not a mapping is left untouched and
/// reported as [`ConfigError::NotAMapping`].
pub fn assign(doc: &mut ConfigDocument, key: &str, value: Value) -> ConfigResult<()> {
    let parts = segments(key)?;
    let Some((last, parents)) = parts.split_last() else {
        return Err(ConfigError::InvalidKey(key.to_string()));
    };

    let mut target = doc;
    for part in parents {
        let entry = target
            .entry((*part).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        target = match entry {
            Value::Object(map) => map,
            _ => {
                return Err(ConfigError::NotAMapping {
                    key: key.to_string(),
                    segment: (*part).to_string(),
                })
            }
        };
    }

    target.insert((*last).to_string(), value);
    Ok(())
}

/// Removes and returns the value at `key`, if present.
pub fn detach(doc: &mut ConfigDocument, key: &str) -> Option<Value> {
    let (parent, last) = match key.rsplit_once('.') {
        Some((parent, last)) => (lookup_mut(doc, parent)?.as_object_mut()?, last),
        None => (doc, key),
    };
    parent.remove(last)
}

fn lookup_mut<'a>(doc: &'a mut ConfigDocument, key: &str) -> Option<&'a mut Value> {
    let mut parts = key.split('.');
    let mut current = doc.get_mut(parts.next()?)?;
    for part in parts {
        current = current.as_object_mut()?.get_mut(part)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigDocument {
        match json!({
            "version": "1.0.0",
            "agents": { "ATLAS": { "model": "sonnet-4.5" } },
            "settings": { "max_retries": 3 }
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_lookup_nested_value() {
        let doc = sample();
        assert_eq!(lookup(&doc, "agents.ATLAS.model"), Some(&json!("sonnet-4.5")));
        assert_eq!(lookup(&doc, "settings.max_retries"), Some(&json!(3)));
        assert_eq!(lookup(&doc, "version"), Some(&json!("1.0.0")));
    }

    #[test]
    fn test_lookup_missing_segment() {
        let doc = sample();
        assert_eq!(lookup(&doc, "agents.FORGE.model"), None);
        assert_eq!(lookup(&doc, "nonexistent.key"), None);
        assert_eq!(lookup(&doc, ""), None);
    }

    #[test]
    fn test_lookup_through_scalar_returns_none() {
        let doc = sample();
        assert_eq!(lookup(&doc, "version.major"), None);
        assert_eq!(lookup(&doc, "settings.max_retries.value"), None);
    }

    #[test]
    fn test_assign_creates_intermediate_mappings() {
        let mut doc = sample();
        assign(&mut doc, "custom.nested.value", json!("test")).expect("assign should succeed");
        assert_eq!(lookup(&doc, "custom.nested.value"), Some(&json!("test")));
        assert!(doc["custom"]["nested"].is_object());
    }

    #[test]
    fn test_assign_overwrites_leaf() {
        let mut doc = sample();
        assign(&mut doc, "agents.ATLAS.model", json!("opus-4.5")).expect("assign should succeed");
        assert_eq!(lookup(&doc, "agents.ATLAS.model"), Some(&json!("opus-4.5")));
    }

    #[test]
    fn test_assign_through_scalar_fails() {
        let mut doc = sample();
        let result = assign(&mut doc, "version.major", json!(1));

        match result {
            Err(ConfigError::NotAMapping { key, segment }) => {
                assert_eq!(key, "version.major");
                assert_eq!(segment, "version");
            }
            other => panic!("Expected NotAMapping error, got {other:?}"),
        }
        assert_eq!(doc["version"], json!("1.0.0"), "scalar must be preserved");
    }

    #[test]
    fn test_assign_rejects_empty_segments() {
        let mut doc = sample();
        for key in ["", "a..b", ".a", "a."] {
            assert!(
                matches!(assign(&mut doc, key, json!(1)), Err(ConfigError::InvalidKey(_))),
                "{key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_detach_nested_and_top_level() {
        let mut doc = sample();
        assert_eq!(detach(&mut doc, "agents.ATLAS.model"), Some(json!("sonnet-4.5")));
        assert_eq!(lookup(&doc, "agents.ATLAS.model"), None);

        assert!(detach(&mut doc, "settings").is_some());
        assert!(!doc.contains_key("settings"));

        assert_eq!(detach(&mut doc, "missing.key"), None);
    }
}
