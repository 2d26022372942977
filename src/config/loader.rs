//! Raw store loader with 2-tier precedence
//!
//! Priority order (highest to lowest):
//! 1. `KEY=VALUE` pairs (command line)
//! 2. Config file (explicit path, or the first of ./.analyzer-options.toml,
//!    $ANALYZER_OPTIONS_CONFIG and ~/.config/analyzer-options/config.toml)
//!
//! Values are loaded verbatim; decoding happens in the session.

use crate::config::{ConfigTable, UserConfig};
use crate::types::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_ENV_VAR: &str = "ANALYZER_OPTIONS_CONFIG";
const PROJECT_CONFIG_NAME: &str = ".analyzer-options.toml";

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    pairs: Vec<(String, String)>,
    discover: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_file: None,
            pairs: Vec::new(),
            discover: true,
        }
    }

    /// Load this file instead of searching the default locations. It must exist.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Skip the default config file locations.
    pub fn without_discovery(mut self) -> Self {
        self.discover = false;
        self
    }

    /// Add a `KEY=VALUE` override.
    pub fn with_pair(mut self, pair: &str) -> Result<Self, ConfigError> {
        let (key, value) = parse_pair(pair)?;
        self.pairs.push((key.to_string(), value.to_string()));
        Ok(self)
    }

    pub fn with_pairs<I, S>(self, pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pairs
            .into_iter()
            .try_fold(self, |loader, pair| loader.with_pair(pair.as_ref()))
    }

    pub fn load(&self) -> Result<ConfigTable, ConfigError> {
        let mut table = ConfigTable::new();

        let file = match &self.config_file {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.clone())),
            Some(path) => Some(path.clone()),
            None if self.discover => Self::discover_config_file(),
            None => None,
        };

        if let Some(path) = file {
            Self::load_file(&path, &mut table)?;
            info!("Loaded {} option(s) from {}", table.len(), path.display());
        } else {
            debug!("No config file found");
        }

        for (key, value) in &self.pairs {
            debug!("Command line option: {}={}", key, value);
            table.insert(key.clone(), value.clone());
        }

        Ok(table)
    }

    fn load_file(path: &Path, table: &mut ConfigTable) -> Result<(), ConfigError> {
        debug!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        UserConfig::parse(&content, path)?.apply_to(table, path)
    }

    fn discover_config_file() -> Option<PathBuf> {
        let mut candidates = Vec::new();

        // Project-specific config
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(PROJECT_CONFIG_NAME));
        }

        // Environment variable
        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            candidates.push(PathBuf::from(config_path));
        }

        // User-global config
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("analyzer-options").join("config.toml"));
        }

        candidates.into_iter().find(|path| path.is_file())
    }
}

/// Split `KEY=VALUE` at the first `=`. The value may be empty, the key may not.
pub fn parse_pair(pair: &str) -> Result<(&str, &str), ConfigError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(ConfigError::MalformedPair(pair.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("mode=shallow").unwrap(), ("mode", "shallow"));
        assert_eq!(
            parse_pair("alpha.core:opt=a=b").unwrap(),
            ("alpha.core:opt", "a=b")
        );
        assert_eq!(parse_pair("ctu-dir=").unwrap(), ("ctu-dir", ""));
        assert!(parse_pair("mode").is_err());
        assert!(parse_pair("=deep").is_err());
    }

    #[test]
    fn test_pairs_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[options]\nmode = \"shallow\"\nmax-nodes = 10").unwrap();

        let table = ConfigLoader::new()
            .with_config_file(file.path())
            .with_pairs(["mode=deep"])
            .unwrap()
            .load()
            .unwrap();

        assert_eq!(table.get("mode"), Some("deep"));
        assert_eq!(table.get("max-nodes"), Some("10"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::new()
            .with_config_file(dir.path().join("nope.toml"))
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_no_discovery_only_pairs() {
        let table = ConfigLoader::new()
            .without_discovery()
            .with_pairs(["core.DivideZero:strict=true", "ipa=none"])
            .unwrap()
            .load()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("core.DivideZero:strict"), Some("true"));
    }
}
