//! Naming conventions shared by the resolver and the locator

/// Prefix of every module environment variable (`ILP_STORE`, `ILP_STORE_OPTIONS`, ...)
pub const ENV_PREFIX: &str = "ILP_";

/// Suffix of the environment variable carrying JSON constructor options
pub const ENV_OPTIONS_SUFFIX: &str = "_OPTIONS";

/// Environment variable overriding the application module root
pub const MODULE_ROOT_ENV: &str = "ILP_MODULE_ROOT";

/// Prefix of externally packaged modules (`ilp-<role>-<name>`)
pub const PACKAGE_PREFIX: &str = "ilp-";

/// Namespace used by the framework's own logger
pub const INTERNAL_LOG_NAMESPACE: &str = "ilp-module";
