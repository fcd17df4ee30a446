//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service lifecycle registry
#[derive(Error, Debug)]
pub enum Error {
    /// A service with the same name is already registered
    #[error("Service already registered: {name}")]
    DuplicateRegistration {
        /// Name of the duplicated service
        name: String,
    },

    /// A declared dependency is not registered
    #[error("Service '{service}' depends on unregistered service '{dependency}'")]
    MissingDependency {
        /// Service declaring the dependency
        service: String,
        /// Dependency that could not be found
        dependency: String,
    },

    /// The dependency graph contains a cycle
    #[error("Circular dependency detected: {}", .cycle.join(" -> "))]
    CircularDependency {
        /// Services forming the cycle, first entry repeated at the end
        cycle: Vec<String>,
    },

    /// No service is registered under the given name
    #[error("Service not found: {name}")]
    ServiceNotFound {
        /// Requested service name
        name: String,
    },

    /// The service is registered but has no cached instance
    #[error("Service not initialized: {name}")]
    ServiceNotInitialized {
        /// Requested service name
        name: String,
    },

    /// The cached instance is not of the requested concrete type
    #[error("Service '{name}' is not of type {expected}")]
    InvalidServiceType {
        /// Requested service name
        name: String,
        /// Requested concrete type
        expected: &'static str,
    },

    /// A service's initialization hook failed
    #[error("Failed to initialize service '{service}': {source}")]
    InitializationFailure {
        /// Failing service
        service: String,
        /// Error raised by the hook
        #[source]
        source: Box<Error>,
    },

    /// A service's teardown hook failed
    #[error("Failed to destroy service '{service}': {source}")]
    DestructionFailure {
        /// Failing service
        service: String,
        /// Error raised by the hook
        #[source]
        source: Box<Error>,
    },

    /// A lifecycle hook did not complete within its bounded wait
    #[error("Service '{service}' {operation} timed out after {timeout_ms}ms")]
    Timeout {
        /// Service whose hook timed out
        service: String,
        /// Lifecycle operation ("initialize" or "destroy")
        operation: String,
        /// Configured bound in milliseconds
        timeout_ms: u64,
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

    /// Error raised by a service while doing its own work
    #[error("Service error: {message}")]
    Service {
        /// Description of the service error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Generic string-based error
    #[error("String error: {0}")]
    String(String),
}

// Registry error creation methods
impl Error {
    /// Create a duplicate registration error
    pub fn duplicate_registration<S: Into<String>>(name: S) -> Self {
        Self::DuplicateRegistration { name: name.into() }
    }

    /// Create a missing dependency error
    pub fn missing_dependency<S: Into<String>, D: Into<String>>(service: S, dependency: D) -> Self {
        Self::MissingDependency {
            service: service.into(),
            dependency: dependency.into(),
        }
    }

    /// Create a circular dependency error from the cycle path
    pub fn circular_dependency(cycle: Vec<String>) -> Self {
        Self::CircularDependency { cycle }
    }

    /// Create a service not found error
    pub fn service_not_found<S: Into<String>>(name: S) -> Self {
        Self::ServiceNotFound { name: name.into() }
    }

    /// Create a service not initialized error
    pub fn service_not_initialized<S: Into<String>>(name: S) -> Self {
        Self::ServiceNotInitialized { name: name.into() }
    }

    /// Create an invalid service type error
    pub fn invalid_service_type<S: Into<String>>(name: S, expected: &'static str) -> Self {
        Self::InvalidServiceType {
            name: name.into(),
            expected,
        }
    }
}

// Lifecycle error creation methods
impl Error {
    /// Wrap a hook error raised during initialization
    pub fn initialization_failure<S: Into<String>>(service: S, source: Error) -> Self {
        Self::InitializationFailure {
            service: service.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a hook error raised during teardown
    pub fn destruction_failure<S: Into<String>>(service: S, source: Error) -> Self {
        Self::DestructionFailure {
            service: service.into(),
            source: Box::new(source),
        }
    }

    /// Create a timeout error for a lifecycle operation
    pub fn timeout<S: Into<String>, O: Into<String>>(
        service: S,
        operation: O,
        timeout: std::time::Duration,
    ) -> Self {
        Self::Timeout {
            service: service.into(),
            operation: operation.into(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

// Configuration, service and internal error creation methods
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

    /// Create a service error
    pub fn service<S: Into<String>>(message: S) -> Self {
        Self::Service {
            message: message.into(),
            source: None,
        }
    }

    /// Create a service error with source
    pub fn service_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Service {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether the error stops process startup
    ///
    /// Registration and ordering errors mean the dependency graph cannot be
    /// trusted; initialization failures abort a bulk startup.
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            Self::DuplicateRegistration { .. }
                | Self::MissingDependency { .. }
                | Self::CircularDependency { .. }
                | Self::InitializationFailure { .. }
        )
    }

    /// Name of the service the error is about, when there is one
    pub fn service_name(&self) -> Option<&str> {
        match self {
            Self::DuplicateRegistration { name }
            | Self::ServiceNotFound { name }
            | Self::ServiceNotInitialized { name }
            | Self::InvalidServiceType { name, .. } => Some(name.as_str()),
            Self::MissingDependency { service, .. }
            | Self::InitializationFailure { service, .. }
            | Self::DestructionFailure { service, .. }
            | Self::Timeout { service, .. } => Some(service.as_str()),
            Self::CircularDependency { cycle } => cycle.first().map(String::as_str),
            _ => None,
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
