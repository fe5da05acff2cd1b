use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Configuration keys enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Repository,
    Snapshot,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Repository => "repository",
            ConfigKey::Snapshot => "snapshot",
        }
    }

    /// Get all config keys
    pub fn all() -> &'static [ConfigKey] {
        &[ConfigKey::Repository, ConfigKey::Snapshot]
    }
}

/// Filename for the project-specific configuration within the config directory.
pub const PROJECT_CONFIG_FILENAME: &str = "config.json";
/// Directory name for project-specific configuration.
pub const PROJECT_CONFIG_DIR: &str = ".minutes-data";

/// Repository exported when nothing else is configured.
pub const DEFAULT_REPOSITORY: &str = "golang/go";
/// Snapshot location used when nothing else is configured.
pub const DEFAULT_SNAPSHOT: &str = "corpus.json";

/// Parses a JSON configuration file content into a map of configuration values.
///
/// - Returns `Ok(HashMap<ConfigKey, Value>)` containing all recognized keys.
/// - Returns an empty HashMap if the input `content` is empty or contains only whitespace.
/// - Returns an `Err` if the JSON parsing fails or the document is not an object.
pub fn parse_config(content: &[u8]) -> Result<HashMap<ConfigKey, Value>> {
    if content.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(HashMap::new());
    }

    let value: Value = serde_json::from_slice(content).context("Failed to parse config JSON")?;

    let mut config_map = HashMap::new();

    if let Value::Object(map) = &value {
        for key in ConfigKey::all() {
            if let Some(val) = map.get(key.as_str()) {
                config_map.insert(*key, val.clone());
            }
        }
        return Ok(config_map);
    }

    Err(anyhow::anyhow!("Config must be an object"))
}

/// Reads `<base_dir>/.minutes-data/config.json`.
///
/// A missing file yields an empty map.
pub fn load_project_config(base_dir: &Path) -> Result<HashMap<ConfigKey, Value>> {
    let path = base_dir
        .join(PROJECT_CONFIG_DIR)
        .join(PROJECT_CONFIG_FILENAME);
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config file {}", path.display()))
}

/// Merges `updates` into `base_config` and returns a new configuration map.
///
/// If a key exists in both, the value from `updates` wins.
pub fn update_config(
    base_config: &HashMap<ConfigKey, Value>,
    updates: &HashMap<ConfigKey, Value>,
) -> HashMap<ConfigKey, Value> {
    let mut new_config = base_config.clone();
    for (key, value) in updates {
        new_config.insert(*key, value.clone());
    }
    new_config
}

/// Fully resolved settings for one export run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub owner: String,
    pub repo: String,
    pub snapshot: String,
}

/// Resolves a merged configuration map, falling back to the defaults for
/// missing keys.
pub fn resolve_settings(config: &HashMap<ConfigKey, Value>) -> Result<Settings> {
    let repository = string_value(config, ConfigKey::Repository)?.unwrap_or(DEFAULT_REPOSITORY);
    let snapshot = string_value(config, ConfigKey::Snapshot)?.unwrap_or(DEFAULT_SNAPSHOT);

    let (owner, repo) = split_repository(repository).ok_or_else(|| {
        anyhow::anyhow!("Invalid repository format '{repository}'. Please use <owner>/<repo>.")
    })?;

    Ok(Settings {
        owner: owner.to_string(),
        repo: repo.to_string(),
        snapshot: snapshot.to_string(),
    })
}

/// Splits `<owner>/<repo>`, rejecting empty parts and extra separators.
pub fn split_repository(repository: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = repository.split('/').collect();
    if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        Some((parts[0], parts[1]))
    } else {
        None
    }
}

fn string_value(config: &HashMap<ConfigKey, Value>, key: ConfigKey) -> Result<Option<&str>> {
    match config.get(&key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(anyhow::anyhow!(
            "Config key '{}' must be a string, got {other}",
            key.as_str()
        )),
    }
}
