//! Infrastructure constants

/// Prefix of environment variables overriding configuration (`ILP_MODULE__LOGGING__LEVEL`)
pub const CONFIG_ENV_PREFIX: &str = "ILP_MODULE";

/// Separator between nested configuration keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "ilp-module.toml";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "ILP_LOG";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name prefix of rolling log files
pub const DEFAULT_LOG_FILE_PREFIX: &str = "ilp-module";
