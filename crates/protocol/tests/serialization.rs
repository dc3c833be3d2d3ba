use serde_json::json;
use tb_protocol::*;

#[test]
fn test_agent_deserialization_from_json() {
    let json_str = r#"{
        "model": "sonnet-4.5",
        "role": "builder",
        "capabilities": ["tool_creation", "testing", "documentation"]
    }"#;

    let agent: AgentConfig =
        serde_json::from_str(json_str).expect("Failed to deserialize AgentConfig");

    assert_eq!(agent.model, "sonnet-4.5");
    assert_eq!(agent.role, "builder");
    assert_eq!(agent.capabilities.len(), 3);
    assert_eq!(agent.capabilities[0], "tool_creation");
}

#[test]
fn test_agent_capabilities_default_to_empty() {
    let agent: AgentConfig = serde_json::from_value(json!({ "model": "grok", "role": "executor" }))
        .expect("Failed to deserialize AgentConfig");

    assert!(agent.capabilities.is_empty());
}

#[test]
fn test_agent_serialization_shape() {
    let agent = AgentConfig::new("opus-4.5", "orchestrator", &["planning", "review"]);

    let value = serde_json::to_value(&agent).expect("Failed to serialize AgentConfig");

    assert_eq!(
        value,
        json!({
            "model": "opus-4.5",
            "role": "orchestrator",
            "capabilities": ["planning", "review"]
        })
    );
}

#[test]
fn test_section_serialization() {
    let json = serde_json::to_value(Section::Agents).expect("Failed to serialize Section");
    assert_eq!(json, "agents");

    let deserialized: Section =
        serde_json::from_value(json).expect("Failed to deserialize Section");
    assert_eq!(deserialized, Section::Agents);
}

#[test]
fn test_section_keys_match_serialized_names() {
    for section in Section::ALL {
        let json = serde_json::to_value(section).expect("Failed to serialize Section");
        assert_eq!(json, section.key());
        assert_eq!(section.to_string(), section.key());
    }
}

#[test]
fn test_document_preserves_key_order() {
    let raw = r#"{"version": "1.0.0", "settings": {}, "paths": {}, "agents": {}}"#;
    let doc: ConfigDocument =
        serde_json::from_str(raw).expect("Failed to deserialize ConfigDocument");

    let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![VERSION_KEY, "settings", "paths", "agents"]);
}
