//! Raw option store and scope resolution
//!
//! Keys are either a bare option name (global) or
//! `<checker full name>:<option name>` (checker-scoped).

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// String-to-string option store owned by one analysis session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigTable {
    entries: BTreeMap<String, String>,
}

impl ConfigTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any previous value. Only loaders should call this.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Global lookup. An absent key is inserted with `default`, so every
    /// later global read of `name` sees the first reader's default.
    pub fn global_option(&mut self, name: &str, default: &str) -> &str {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!("Option '{}' unset, recording default '{}'", name, default);
                default.to_string()
            })
            .as_str()
    }

    /// Checker-scoped lookup of `<checker>:<option>`.
    ///
    /// With `search_parents`, the checker name is truncated at its last `.`
    /// and the lookup repeated until a key is found or the name runs out.
    /// Scoped lookups never insert.
    pub fn checker_option<'a>(
        &'a self,
        checker: &str,
        option: &str,
        default: &'a str,
        search_parents: bool,
    ) -> &'a str {
        let mut scope = checker;
        loop {
            let key = format!("{}:{}", scope, option);
            if let Some(value) = self.entries.get(&key) {
                debug!("Resolved '{}' from '{}'", option, key);
                return value;
            }
            if !search_parents {
                break;
            }
            match scope.rfind('.') {
                Some(pos) if pos > 0 => scope = &scope[..pos],
                _ => break,
            }
        }
        default
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = ConfigTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}
