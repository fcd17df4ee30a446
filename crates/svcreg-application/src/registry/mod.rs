//! Service Registry
//!
//! - **service_registry.rs** - Registration, ordered initialization, teardown
//! - **options.rs** - Bounded waits around lifecycle hooks
//! - **validation.rs** - Descriptor sanity checks

/// Lifecycle options
pub mod options;
/// Registry implementation
pub mod service_registry;
/// Descriptor validation
pub mod validation;

pub use options::LifecycleOptions;
pub use service_registry::ServiceRegistry;
pub use validation::validate_metadata;
