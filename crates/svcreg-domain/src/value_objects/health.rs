//! Per-service health check result

use serde::{Deserialize, Serialize};

/// Outcome of a service's own health check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Whether the service considers itself healthy
    pub healthy: bool,
    /// Service specific diagnostics
    pub details: Option<serde_json::Value>,
}

impl ServiceHealth {
    /// Healthy answer without details
    pub fn healthy() -> Self {
        Self {
            healthy: true,
            details: None,
        }
    }

    /// Unhealthy answer without details
    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            details: None,
        }
    }

    /// Attach diagnostics
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
