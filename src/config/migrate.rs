//! Keeps an existing configuration file in step with the current
//! `Config` layout by adding keys that are missing.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn defaults_as_yaml() -> AppResult<Value> {
    Ok(serde_yaml::to_value(Config::default())?)
}

fn read_mapping(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    if !yaml.is_mapping() && !yaml.is_null() {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    }
    Ok(yaml)
}

/// Walk `defaults` and insert into `target` every key it lacks, recording
/// dotted key names in `added`.
fn merge_missing(target: &mut Mapping, defaults: &Mapping, prefix: &str, added: &mut Vec<String>) {
    for (key, default_value) in defaults {
        let name = match key.as_str() {
            Some(k) if prefix.is_empty() => k.to_string(),
            Some(k) => format!("{prefix}.{k}"),
            None => continue,
        };

        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), default_value.clone());
                added.push(name);
            }
            Some(Value::Mapping(inner)) => {
                if let Value::Mapping(inner_defaults) = default_value {
                    merge_missing(inner, inner_defaults, &name, added);
                }
            }
            Some(_) => {}
        }
    }
}

fn merged(path: &Path) -> AppResult<(Value, Vec<String>)> {
    let mut yaml = read_mapping(path)?;
    if yaml.is_null() {
        yaml = Value::Mapping(Mapping::new());
    }

    let defaults = defaults_as_yaml()?;
    let mut added = Vec::new();

    if let (Some(map), Some(defaults)) = (yaml.as_mapping_mut(), defaults.as_mapping()) {
        merge_missing(map, defaults, "", &mut added);
    }
    Ok((yaml, added))
}

/// Keys the file at `path` does not define.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    Ok(merged(path)?.1)
}

/// Add the missing keys with their default values and rewrite the file.
/// Returns the keys that were added.
pub fn fill_missing(path: &Path) -> AppResult<Vec<String>> {
    let (yaml, added) = merged(path)?;
    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&yaml)?)?;
    }
    Ok(added)
}
