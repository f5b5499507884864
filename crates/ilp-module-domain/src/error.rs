//! Error handling types

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for module resolution, construction and the built-in modules
#[derive(Error, Debug)]
pub enum Error {
    /// No explicit, environment or default name could be found for the role type
    #[error(
        "'{role}' is not a known ILP module type (or no default module found for this type)."
    )]
    UnknownRole {
        /// The role type that could not be resolved
        role: String,
    },

    /// The `ILP_<ROLE>_OPTIONS` variable does not hold a JSON object
    #[error("Malformed module options in environment variable {variable}: {source}")]
    MalformedEnvironmentOptions {
        /// Name of the offending environment variable
        variable: String,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// None of the lookup strategies produced a module
    #[error("{role} not found as a module name or under /{role}s/. name={name}, path={}", .path.display())]
    ModuleNotFound {
        /// Role type being located
        role: String,
        /// Resolved module name
        name: String,
        /// Application path that was tried
        path: PathBuf,
    },

    /// The located module exposes no constructor
    #[error("{role} does not export a constructor. module={module}")]
    InvalidExport {
        /// Role type being located
        role: String,
        /// Reference of the module that was located
        module: String,
    },

    /// The constructed instance does not satisfy its role contract
    #[error("Loaded a module named {name} but it is not a valid {role}.")]
    InvalidModule {
        /// Resolved module name
        name: String,
        /// Role type the instance was built for
        role: String,
    },

    /// Constructor options could not be read into a module's typed options
    #[error("Invalid options for module {module}: {source}")]
    InvalidOptions {
        /// Module whose options were rejected
        module: String,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// A module requires a service that was not supplied
    #[error("{module} requires a {service} service")]
    MissingService {
        /// Module that needs the service
        module: String,
        /// Description of the missing service
        service: String,
    },

    /// Exchange-rate backend error
    #[error("Backend error: {message}")]
    Backend {
        /// Description of the backend error
        message: String,
    },

    /// Plugin operation error
    #[error("Plugin error: {message}")]
    Plugin {
        /// Description of the plugin error
        message: String,
    },

    /// Key/value store error
    #[error("Store error: {message}")]
    Store {
        /// Description of the store error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an unknown role error
    pub fn unknown_role<S: Into<String>>(role: S) -> Self {
        Self::UnknownRole { role: role.into() }
    }

    /// Create a malformed environment options error
    pub fn malformed_environment_options<S: Into<String>>(
        variable: S,
        source: serde_json::Error,
    ) -> Self {
        Self::MalformedEnvironmentOptions {
            variable: variable.into(),
            source,
        }
    }

    /// Create a module not found error
    pub fn module_not_found<R: Into<String>, N: Into<String>, P: Into<PathBuf>>(
        role: R,
        name: N,
        path: P,
    ) -> Self {
        Self::ModuleNotFound {
            role: role.into(),
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create an invalid export error
    pub fn invalid_export<R: Into<String>, M: Into<String>>(role: R, module: M) -> Self {
        Self::InvalidExport {
            role: role.into(),
            module: module.into(),
        }
    }

    /// Create a validation error
    pub fn invalid_module<N: Into<String>, R: Into<String>>(name: N, role: R) -> Self {
        Self::InvalidModule {
            name: name.into(),
            role: role.into(),
        }
    }
}

// Module error creation methods
impl Error {
    /// Create an invalid options error
    pub fn invalid_options<S: Into<String>>(module: S, source: serde_json::Error) -> Self {
        Self::InvalidOptions {
            module: module.into(),
            source,
        }
    }

    /// Create a missing service error
    pub fn missing_service<M: Into<String>, S: Into<String>>(module: M, service: S) -> Self {
        Self::MissingService {
            module: module.into(),
            service: service.into(),
        }
    }

    /// Create a backend error
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create a plugin error
    pub fn plugin<S: Into<String>>(message: S) -> Self {
        Self::Plugin {
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
