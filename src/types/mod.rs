mod errors;

pub use errors::{ConfigError, OptionError, Result, ValidationReport};
