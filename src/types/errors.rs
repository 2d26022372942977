use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A value in the raw store that cannot be decoded into the option's type.
///
/// These are cached inside invalid memo cells, so they must stay cheap to
/// clone and never carry I/O state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("option '{key}' should be a base-10 integer, got '{value}'")]
    InvalidInteger { key: String, value: String },

    #[error("option '{key}' does not accept '{value}' (expected one of: {})", .expected.join(", "))]
    InvalidToken {
        key: String,
        value: String,
        expected: Vec<&'static str>,
    },

    #[error("option '{key}' is out of range: {value}")]
    OutOfRange { key: String, value: i64 },
}

impl OptionError {
    /// The option token the error was raised for.
    pub fn key(&self) -> &str {
        match self {
            OptionError::InvalidInteger { key, .. }
            | OptionError::InvalidToken { key, .. }
            | OptionError::OutOfRange { key, .. } => key,
        }
    }
}

/// Every violation found by an eager validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<OptionError>,
}

impl ValidationReport {
    /// Record an error unless one was already recorded for the same key.
    pub fn push(&mut self, error: OptionError) {
        if self.errors.iter().all(|e| e.key() != error.key()) {
            self.errors.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[OptionError] {
        &self.errors
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid analyzer option(s)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Option(#[from] OptionError),

    #[error("{0}")]
    Validation(ValidationReport),

    #[error("Malformed option '{0}': expected KEY=VALUE")]
    MalformedPair(String),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported value for option '{key}' in {path}: only strings, integers, floats and booleans are allowed")]
    UnsupportedValue { key: String, path: PathBuf },

    #[error("Invalid checker registry file {file}: {reason}")]
    Registry { file: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn bad_token(key: &str) -> OptionError {
        OptionError::InvalidToken {
            key: key.to_string(),
            value: "sideways".to_string(),
            expected: vec!["shallow", "deep"],
        }
    }

    #[test]
    fn test_invalid_token_lists_domain() {
        let msg = bad_token("mode").to_string();
        assert!(msg.contains("'sideways'"));
        assert!(msg.contains("shallow, deep"));
    }

    #[test]
    fn test_report_keeps_one_error_per_key() {
        let mut report = ValidationReport::default();
        report.push(bad_token("mode"));
        report.push(bad_token("mode"));
        report.push(OptionError::OutOfRange {
            key: "max-nodes".to_string(),
            value: -1,
        });

        assert_eq!(report.len(), 2);
        let rendered = report.to_string();
        assert!(rendered.starts_with("2 invalid analyzer option(s)"));
        assert!(rendered.contains("max-nodes"));
    }
}
