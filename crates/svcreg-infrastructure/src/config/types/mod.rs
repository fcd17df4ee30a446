//! Configuration data types

mod lifecycle;
mod logging;
mod registry;

pub use lifecycle::LifecycleConfig;
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;
