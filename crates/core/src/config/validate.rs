//! Structural validation of a configuration document.

use serde_json::Value;
use tb_protocol::config_models::{ConfigDocument, Section};

/// Checks `doc` for missing sections and incomplete agent descriptors.
///
/// Returns one human-readable message per problem. An empty list means the
/// document is valid.
pub fn validate_document(doc: &ConfigDocument) -> Vec<String> {
    let mut errors = Vec::new();

    for section in Section::ALL {
        match doc.get(section.key()) {
            None => errors.push(format!("Missing required section: {section}")),
            Some(Value::Object(_)) => {}
            Some(_) => errors.push(format!("Section {section} must be a mapping")),
        }
    }

    let Some(Value::Object(agents)) = doc.get(Section::Agents.key()) else {
        return errors;
    };

    for (name, agent) in agents {
        let Some(fields) = agent.as_object().filter(|f| !f.is_empty()) else {
            errors.push(format!("Invalid agent config: {name}"));
            continue;
        };
        if !has_text(fields.get("model")) {
            errors.push(format!("Agent {name} missing model"));
        } else if !has_text(fields.get("role")) {
            errors.push(format!("Agent {name} missing role"));
        }
    }

    errors
}

fn has_text(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}
