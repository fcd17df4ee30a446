//! Registry diagnostics

use serde::{Deserialize, Serialize};

use super::state::ServiceLifecycleState;

/// Diagnostic snapshot of one registered service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Always true for services reported by the registry
    pub registered: bool,
    /// Whether an instance is currently cached
    pub initialized: bool,
    /// Lifecycle state tracked by the registry
    pub state: ServiceLifecycleState,
    /// Whether the instance is cached after initialization
    pub singleton: bool,
}

/// Result of the pre-registration sanity check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no errors were found
    pub valid: bool,
    /// Human readable problems
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Build a result from the collected errors
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
