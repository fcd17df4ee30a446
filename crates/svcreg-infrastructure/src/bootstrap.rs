//! Composition-root helpers
//!
//! Wires a [`ServiceRegistry`] from [`RegistryConfig`] and tears it down
//! again without letting shutdown failures block process exit.

use std::any::Any;
use std::sync::Arc;

use svcreg_application::ServiceRegistry;
use svcreg_domain::error::Error;
use svcreg_domain::ports::Logger;
use tracing::info;

use crate::config::RegistryConfig;
use crate::logging::TracingLogger;
use crate::utils::TimedOperation;

/// Build a registry logging through `tracing` with the configured bounds
///
/// `app_config` is passed to every service untouched.
pub fn build_registry<C: Any + Send + Sync>(config: &RegistryConfig, app_config: C) -> ServiceRegistry {
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new());
    ServiceRegistry::with_options(app_config, Some(logger), config.lifecycle.to_options())
}

/// Outcome of [`shutdown_registry`]
#[derive(Debug, Default)]
pub struct ShutdownReport {
    /// Services torn down cleanly, in teardown order
    pub destroyed: Vec<String>,
    /// Services whose teardown failed, with the failure
    pub failed: Vec<(String, Error)>,
}

impl ShutdownReport {
    /// Every service was torn down cleanly
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Destroy every cached service and collect the outcome
///
/// Each failed teardown is already logged by the registry as it happens.
pub async fn shutdown_registry(registry: &ServiceRegistry) -> ShutdownReport {
    let timer = TimedOperation::start();
    let mut report = ShutdownReport::default();

    for (name, result) in registry.destroy_all_services().await {
        match result {
            Ok(()) => report.destroyed.push(name),
            Err(e) => report.failed.push((name, e)),
        }
    }

    info!(
        destroyed = report.destroyed.len(),
        failed = report.failed.len(),
        elapsed_ms = timer.elapsed_ms(),
        "Registry shut down"
    );
    report
}
