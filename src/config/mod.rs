//! Configuration input for the analyzer
//!
//! Provides the raw option store and what seeds it:
//! 1. Command line `KEY=VALUE` pairs (highest priority)
//! 2. A TOML config file (lowest priority)
//!
//! plus the checker registry embedded at build time.

mod loader;
mod registry;
mod table;
mod user_config;

pub use loader::{parse_pair, ConfigLoader, CONFIG_ENV_VAR};
pub use registry::{CheckerInfo, CheckerPackage, CheckerRegistry};
pub use table::ConfigTable;
pub use user_config::UserConfig;
