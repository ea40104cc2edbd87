//! Bring an existing YAML config file up to date with the current set of
//! fields without touching the values the user already set.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Top-level keys every config file is expected to carry.
fn expected_fields() -> AppResult<Mapping> {
    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(format!("Failed to serialize defaults: {e}")))?;

    match defaults {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("Default config is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(format!("{}: {e}", path.display()))),
    }
}

/// Names of the expected keys absent from the file.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;

    Ok(expected_fields()?
        .keys()
        .filter(|k| !current.contains_key(k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Insert default values for every missing key and rewrite the file.
/// Returns the keys that were added (empty if nothing changed).
pub fn add_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, value) in expected_fields()? {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current))
        .map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized)?;

    Ok(added)
}
