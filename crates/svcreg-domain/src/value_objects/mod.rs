//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ServiceMetadata`] | Static descriptor: name, version, dependencies, singleton flag |
//! | [`ServiceLifecycleState`] | Per-service lifecycle state machine |
//! | [`ServiceStatus`] | Diagnostic snapshot reported by the registry |
//! | [`ValidationResult`] | Outcome of the pre-registration sanity check |
//! | [`ServiceHealth`] | Outcome of a service's own health check |

/// Per-service health check result
pub mod health;
/// Service descriptor
pub mod metadata;
/// Lifecycle state machine
pub mod state;
/// Registry diagnostics
pub mod status;

pub use health::ServiceHealth;
pub use metadata::ServiceMetadata;
pub use state::ServiceLifecycleState;
pub use status::{ServiceStatus, ValidationResult};
