//! Built-in checker registry
//!
//! One TOML file per checker package under `registry/`, embedded at compile
//! time. The master list is ordered by file name, then by position in file.

use crate::analyzer::list_checkers;
use crate::types::ConfigError;
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use tracing::debug;

// Embed the registry directory at compile time
static REGISTRY_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/registry");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerPackage {
    pub package: String,
    #[serde(default)]
    pub checkers: Vec<CheckerInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerInfo {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CheckerRegistry {
    checkers: Vec<CheckerInfo>,
}

impl CheckerRegistry {
    /// Load the registry embedded in the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        let mut files: Vec<_> = REGISTRY_DIR
            .files()
            .filter(|f| f.path().extension().is_some_and(|ext| ext == "toml"))
            .collect();
        files.sort_by(|a, b| a.path().cmp(b.path()));

        let mut packages = Vec::with_capacity(files.len());
        for file in files {
            let file_name = file.path().display().to_string();
            let content = file.contents_utf8().ok_or_else(|| ConfigError::Registry {
                file: file_name.clone(),
                reason: "invalid UTF-8".to_string(),
            })?;
            let package: CheckerPackage =
                toml::from_str(content).map_err(|e| ConfigError::Registry {
                    file: file_name.clone(),
                    reason: e.to_string(),
                })?;
            debug!(
                "Loaded registry package '{}' with {} checker(s)",
                package.package,
                package.checkers.len()
            );
            packages.push((file_name, package));
        }

        Self::from_packages(packages)
    }

    /// Build a registry from already parsed packages, keeping their order.
    pub fn from_packages<I>(packages: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, CheckerPackage)>,
    {
        let mut checkers = Vec::new();
        for (file, package) in packages {
            let prefix = format!("{}.", package.package);
            for checker in package.checkers {
                if !checker.name.starts_with(&prefix) {
                    return Err(ConfigError::Registry {
                        file,
                        reason: format!(
                            "checker '{}' is outside package '{}'",
                            checker.name, package.package
                        ),
                    });
                }
                checkers.push(checker);
            }
        }
        Ok(Self { checkers })
    }

    pub fn checkers(&self) -> &[CheckerInfo] {
        &self.checkers
    }

    pub fn get(&self, name: &str) -> Option<&CheckerInfo> {
        self.checkers.iter().find(|c| c.name == name)
    }

    /// Checkers a user may enable: no `debug.` checkers, and `alpha.` ones
    /// only when experimental checkers are requested.
    pub fn registered_checkers(&self, include_experimental: bool) -> Vec<&str> {
        list_checkers(
            self.checkers.iter().map(|c| c.name.as_str()),
            include_experimental,
        )
    }
}
