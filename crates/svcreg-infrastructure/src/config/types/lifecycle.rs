//! Lifecycle hook bounds

use std::time::Duration;

use serde::{Deserialize, Serialize};
use svcreg_application::LifecycleOptions;

/// Optional bounded waits around service hooks, in milliseconds
///
/// Unset values wait indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Bound for each `on_initialize` call
    pub initialize_timeout_ms: Option<u64>,

    /// Bound for each `on_destroy` call
    pub destroy_timeout_ms: Option<u64>,
}

impl LifecycleConfig {
    /// Registry options described by this section
    pub fn to_options(&self) -> LifecycleOptions {
        LifecycleOptions {
            initialize_timeout: self.initialize_timeout_ms.map(Duration::from_millis),
            destroy_timeout: self.destroy_timeout_ms.map(Duration::from_millis),
        }
    }
}

impl From<LifecycleConfig> for LifecycleOptions {
    fn from(config: LifecycleConfig) -> Self {
        config.to_options()
    }
}
