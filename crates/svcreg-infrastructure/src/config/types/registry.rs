//! Root configuration

use serde::{Deserialize, Serialize};

use super::{LifecycleConfig, LoggingConfig};

/// Configuration of the registry runtime itself
///
/// Application configuration handed to services is separate and opaque to
/// the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Logging setup
    pub logging: LoggingConfig,

    /// Lifecycle hook bounds
    pub lifecycle: LifecycleConfig,
}
