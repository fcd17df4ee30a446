//! Per-initialization service context and name-bound logging

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use svcreg_domain::error::{Error, Result};
use svcreg_domain::ports::{LogLevel, Logger};

use crate::registry::ServiceRegistry;

/// Logger bound to a single service
///
/// Every message is prefixed with `[<service>]`. Without an underlying
/// logger all calls are no-ops. Cheap to clone, so services may keep it for
/// use after initialization.
#[derive(Clone)]
pub struct ServiceLogger {
    service: Arc<str>,
    logger: Option<Arc<dyn Logger>>,
}

impl ServiceLogger {
    /// Bind a logger to a service name
    pub fn new(service: &str, logger: Option<Arc<dyn Logger>>) -> Self {
        Self {
            service: Arc::from(service),
            logger,
        }
    }

    /// Logger that drops every record
    pub fn disabled(service: &str) -> Self {
        Self::new(service, None)
    }

    /// Name of the service this logger is bound to
    pub fn service_name(&self) -> &str {
        &self.service
    }

    /// Whether records reach an underlying logger
    pub fn is_enabled(&self) -> bool {
        self.logger.is_some()
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Debug, message.as_ref(), None);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Info, message.as_ref(), None);
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Warn, message.as_ref(), None);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Error, message.as_ref(), None);
    }

    pub fn debug_with(&self, message: impl AsRef<str>, data: &serde_json::Value) {
        self.log_with(LogLevel::Debug, message, data);
    }

    pub fn info_with(&self, message: impl AsRef<str>, data: &serde_json::Value) {
        self.log_with(LogLevel::Info, message, data);
    }

    pub fn warn_with(&self, message: impl AsRef<str>, data: &serde_json::Value) {
        self.log_with(LogLevel::Warn, message, data);
    }

    pub fn error_with(&self, message: impl AsRef<str>, data: &serde_json::Value) {
        self.log_with(LogLevel::Error, message, data);
    }

    /// Log with a structured payload
    pub fn log_with(&self, level: LogLevel, message: impl AsRef<str>, data: &serde_json::Value) {
        self.emit(level, message.as_ref(), Some(data));
    }

    fn emit(&self, level: LogLevel, message: &str, data: Option<&serde_json::Value>) {
        if let Some(logger) = &self.logger {
            logger.log(level, &format!("[{}] {}", self.service, message), data);
        }
    }
}

impl fmt::Debug for ServiceLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceLogger")
            .field("service", &self.service)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Context handed to [`crate::ports::Service::on_initialize`]
///
/// The configuration is opaque to the registry; each service reads it back
/// with its own concrete type through [`ServiceContext::config`].
pub struct ServiceContext<'a> {
    config: Arc<dyn Any + Send + Sync>,
    logger: ServiceLogger,
    registry: &'a ServiceRegistry,
}

impl<'a> ServiceContext<'a> {
    pub(crate) fn new(
        config: Arc<dyn Any + Send + Sync>,
        logger: ServiceLogger,
        registry: &'a ServiceRegistry,
    ) -> Self {
        Self {
            config,
            logger,
            registry,
        }
    }

    /// Typed view of the shared configuration
    pub fn config<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        Arc::clone(&self.config).downcast::<T>().map_err(|_| {
            Error::configuration(format!(
                "Service '{}' requested configuration of type {}",
                self.logger.service_name(),
                type_name::<T>()
            ))
        })
    }

    /// Untyped shared configuration
    pub fn raw_config(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.config
    }

    /// Logger bound to the service being initialized
    pub fn logger(&self) -> &ServiceLogger {
        &self.logger
    }

    /// Registry used to pull sibling services
    pub fn registry(&self) -> &'a ServiceRegistry {
        self.registry
    }
}

impl fmt::Debug for ServiceContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceContext")
            .field("service", &self.logger.service_name())
            .finish_non_exhaustive()
    }
}
