//! # Service Lifecycle Registry
//!
//! A small dependency-injection runtime: register named, versioned services,
//! resolve their declared dependencies, initialize them in order, tear them
//! down in reverse and aggregate their health.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use svcreg::{Result, Service, ServiceContext, ServiceMetadata};
//! use svcreg::infrastructure::{RegistryConfig, build_registry, shutdown_registry};
//!
//! struct Database {
//!     metadata: ServiceMetadata,
//! }
//!
//! #[svcreg::async_trait]
//! impl Service for Database {
//!     fn metadata(&self) -> &ServiceMetadata {
//!         &self.metadata
//!     }
//!
//!     async fn on_initialize(&self, context: &ServiceContext<'_>) -> Result<()> {
//!         context.logger().info("connected");
//!         Ok(())
//!     }
//!
//!     async fn on_destroy(&self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! # async fn run() -> Result<()> {
//! let registry = build_registry(&RegistryConfig::default(), ());
//! registry.register_service(Arc::new(Database {
//!     metadata: ServiceMetadata::new("db", "1.0.0"),
//! }))?;
//! registry.initialize_all_services().await?;
//!
//! let report = shutdown_registry(&registry).await;
//! assert!(report.is_clean());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, service descriptors, lifecycle states, logger port
//! - `application` - Service port, dependency resolver and the registry
//! - `infrastructure` - Configuration, tracing, health aggregation, bootstrap

/// Domain layer - errors, value objects and the logger port
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use svcreg_domain::*;
}

/// Application layer - service port, resolver and registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use svcreg_application::*;
}

/// Infrastructure layer - config, logging, health and bootstrap helpers
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use svcreg_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the registry surface at the crate root
pub use application::{LifecycleOptions, Service, ServiceContext, ServiceLogger, ServiceRegistry};

// Re-export for implementing `Service` without a direct dependency
pub use async_trait::async_trait;
