//! Service lifecycle state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a registered service
///
/// ```text
/// Registered -> Initializing -> Initialized -> Destroying -> Destroyed
///                    ^                                          |
///                    +------------------ reload ----------------+
/// ```
///
/// A failed initialization falls back to the state it started from; a failed
/// teardown falls back to `Initialized`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ServiceLifecycleState {
    /// Registered, never initialized
    #[default]
    Registered,
    /// `on_initialize` is running
    Initializing,
    /// Initialization completed successfully
    Initialized,
    /// `on_destroy` is running
    Destroying,
    /// Teardown completed successfully
    Destroyed,
}

impl ServiceLifecycleState {
    /// Whether the service finished initializing and has not been torn down
    pub fn is_initialized(self) -> bool {
        matches!(self, Self::Initialized)
    }

    /// Whether a lifecycle hook is currently running
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Initializing | Self::Destroying)
    }
}

impl fmt::Display for ServiceLifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Registered => "registered",
            Self::Initializing => "initializing",
            Self::Initialized => "initialized",
            Self::Destroying => "destroying",
            Self::Destroyed => "destroyed",
        };
        f.write_str(label)
    }
}
