//! Lifecycle options applied by the registry

use std::time::Duration;

/// Bounded waits around lifecycle hooks
///
/// `None` waits indefinitely, so a hung hook blocks the whole startup or
/// shutdown sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleOptions {
    /// Upper bound for each `on_initialize` call
    pub initialize_timeout: Option<Duration>,
    /// Upper bound for each `on_destroy` call
    pub destroy_timeout: Option<Duration>,
}

impl LifecycleOptions {
    /// Set the initialization bound
    pub fn with_initialize_timeout(mut self, timeout: Duration) -> Self {
        self.initialize_timeout = Some(timeout);
        self
    }

    /// Set the teardown bound
    pub fn with_destroy_timeout(mut self, timeout: Duration) -> Self {
        self.destroy_timeout = Some(timeout);
        self
    }
}
