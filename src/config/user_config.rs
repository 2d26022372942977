//! User configuration file parsing

use crate::config::ConfigTable;
use crate::types::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// On-disk form of the raw option store.
///
/// ```toml
/// [options]
/// mode = "shallow"
/// max-nodes = 50000
///
/// [checkers."alpha.core"]
/// aggressive = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub options: BTreeMap<String, toml::Value>,
    #[serde(default)]
    pub checkers: BTreeMap<String, BTreeMap<String, toml::Value>>,
}

impl UserConfig {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Flatten into raw `key -> value` strings, scoped keys as `checker:option`.
    pub fn apply_to(&self, table: &mut ConfigTable, path: &Path) -> Result<(), ConfigError> {
        for (name, value) in &self.options {
            table.insert(name.clone(), stringify(name, value, path)?);
        }
        for (checker, options) in &self.checkers {
            for (name, value) in options {
                let key = format!("{}:{}", checker, name);
                let value = stringify(&key, value, path)?;
                table.insert(key, value);
            }
        }
        Ok(())
    }
}

fn stringify(key: &str, value: &toml::Value, path: &Path) -> Result<String, ConfigError> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        _ => Err(ConfigError::UnsupportedValue {
            key: key.to_string(),
            path: path.to_path_buf(),
        }),
    }
}
