//! Service lifecycle port
//!
//! Every service managed by the registry implements [`Service`]. The registry
//! owns the lifecycle bookkeeping (see [`crate::lifecycle::ManagedService`]);
//! implementations only provide metadata and the two hooks.

use async_trait::async_trait;
use downcast_rs::{DowncastSync, impl_downcast};
use svcreg_domain::error::Result;
use svcreg_domain::{ServiceHealth, ServiceMetadata};

use crate::lifecycle::ServiceContext;

/// Lifecycle contract for services managed by the registry
///
/// Hooks are never called concurrently for the same service, and
/// `on_initialize` is never called twice without an `on_destroy` in between.
///
/// # Example
///
/// ```no_run
/// use async_trait::async_trait;
/// use svcreg_application::ports::Service;
/// use svcreg_application::lifecycle::ServiceContext;
/// use svcreg_domain::{Result, ServiceMetadata};
///
/// struct Database {
///     metadata: ServiceMetadata,
/// }
///
/// #[async_trait]
/// impl Service for Database {
///     fn metadata(&self) -> &ServiceMetadata {
///         &self.metadata
///     }
///
///     async fn on_initialize(&self, context: &ServiceContext<'_>) -> Result<()> {
///         context.logger().info("connecting");
///         Ok(())
///     }
///
///     async fn on_destroy(&self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Service: DowncastSync {
    /// Static descriptor of the service
    fn metadata(&self) -> &ServiceMetadata;

    /// Perform the actual setup work
    ///
    /// Already-initialized dependencies can be pulled through
    /// `context.registry()`.
    async fn on_initialize(&self, context: &ServiceContext<'_>) -> Result<()>;

    /// Perform the actual teardown work
    async fn on_destroy(&self) -> Result<()>;

    /// Optional health check; `None` means the service exposes no health check
    async fn health_check(&self) -> Option<ServiceHealth> {
        None
    }
}

impl_downcast!(sync Service);
