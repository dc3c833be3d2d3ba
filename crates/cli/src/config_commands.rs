//! Handlers for the `configmanager` subcommands.
//!
//! Each handler prints its result to stdout and returns the process exit
//! code: `1` for missing arguments, unknown keys, or a failed validation.

use colored::Colorize;
use color_eyre::Result;
use serde_json::Value;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tb_core::ConfigStore;
use tb_protocol::{Section, VERSION_KEY};
use tracing::info;

const RULE_WIDTH: usize = 60;

pub fn show(store: &ConfigStore) -> ExitCode {
    let rule = "=".repeat(RULE_WIDTH);

    println!("\n{rule}");
    println!("TEAM BRAIN CONFIGURATION");
    println!("{rule}");
    println!("Config file: {}", store.path().display());
    println!(
        "Version: {}",
        store.get(VERSION_KEY).map(display_value).unwrap_or_default()
    );

    println!("\nPaths:");
    print_entries(store, Section::Paths);

    println!("\nAgents:");
    for name in store.agent_names() {
        match store.get_agent(&name) {
            Some(agent) => println!("  {name}: {} ({})", agent.model, agent.role),
            None => println!("  {name}: {}", "<invalid>".yellow()),
        }
    }

    println!("\nSettings:");
    print_entries(store, Section::Settings);
    println!("{rule}\n");

    ExitCode::SUCCESS
}

pub fn get(store: &ConfigStore, key: Option<&str>) -> Result<ExitCode> {
    let Some(key) = key.filter(|k| !k.is_empty()) else {
        return Ok(usage_error("--key required"));
    };

    match store.get(key) {
        Some(Value::Null) | None => {
            println!("Key not found: {key}");
            Ok(ExitCode::FAILURE)
        }
        Some(value) => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

pub fn set(store: &mut ConfigStore, key: Option<&str>, raw: Option<&str>) -> Result<ExitCode> {
    let (Some(key), Some(raw)) = (
        key.filter(|k| !k.is_empty()),
        raw.filter(|v| !v.is_empty()),
    ) else {
        return Ok(usage_error("--key and --value required"));
    };

    let value = parse_value(raw);
    let shown = display_value(&value);

    store.set(key, value)?;
    store.save()?;
    info!(key, "config value updated");

    println!("{} Set {key} = {shown}", "[OK]".green());
    Ok(ExitCode::SUCCESS)
}

pub fn list(store: &ConfigStore, section: Option<Section>) -> ExitCode {
    let Some(section) = section else {
        return usage_error("--section required (paths, agents, or settings)");
    };

    println!("\n=== {} ===", section.key().to_uppercase());
    match section {
        Section::Agents => {
            for name in store.agent_names() {
                println!("  {name}:");
                match store.get_agent(&name) {
                    Some(agent) => {
                        println!("    Model: {}", agent.model);
                        println!("    Role: {}", agent.role);
                        println!("    Capabilities: {}", agent.capabilities.join(", "));
                    }
                    None => println!("    {}", "<invalid descriptor>".yellow()),
                }
            }
        }
        Section::Paths | Section::Settings => print_entries(store, section),
    }
    println!();

    ExitCode::SUCCESS
}

pub fn validate(store: &ConfigStore) -> ExitCode {
    let errors = store.validate();

    if errors.is_empty() {
        println!("\n{} Configuration valid!\n", "[OK]".green());
        return ExitCode::SUCCESS;
    }

    println!("\n{}", "[VALIDATION FAILED]".red().bold());
    for error in &errors {
        println!("  - {error}");
    }
    println!();
    ExitCode::FAILURE
}

pub fn reset(store: &mut ConfigStore, assume_yes: bool) -> Result<ExitCode> {
    let prompt = "Reset to defaults? This will overwrite current config! (yes/no): ";
    if !assume_yes && !confirm(prompt)? {
        println!("Cancelled");
        return Ok(ExitCode::SUCCESS);
    }

    store.reset_to_defaults()?;
    info!(path = %store.path().display(), "config reset to defaults");
    println!("{} Configuration reset to defaults", "[OK]".green());
    Ok(ExitCode::SUCCESS)
}

/// Interprets a command-line value as JSON, falling back to a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Strings print bare; everything else prints as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn print_entries(store: &ConfigStore, section: Section) {
    let entries = match section {
        Section::Paths => store.list_paths(),
        Section::Agents => store.list_agents(),
        Section::Settings => store.list_settings(),
    };
    for (name, value) in &entries {
        println!("  {name}: {}", display_value(value));
    }
}

fn usage_error(message: &str) -> ExitCode {
    println!("{} {message}", "ERROR:".red());
    ExitCode::FAILURE
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}
