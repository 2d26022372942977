//! Analyzer Options - configuration resolution for a checker-based static analyzer
//!
//! This crate turns a flat `key=value` store into typed, validated option
//! values. Checkers read scoped keys (`alpha.core.CastSize:option`) that fall
//! back through their dotted package names, and several budgets take their
//! defaults from the high-level analysis mode.

pub mod analyzer;
pub mod config;
pub mod types;

pub use analyzer::{AnalyzerOptions, CheckerIdentity, Memo};
pub use config::{CheckerRegistry, ConfigLoader, ConfigTable};
pub use types::{ConfigError, OptionError, ValidationReport};
