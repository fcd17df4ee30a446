//! # Domain Layer
//!
//! Core types of the service lifecycle registry. Nothing here knows how
//! services are ordered or initialized; it only describes them.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`value_objects`] | Descriptors, lifecycle states, status and health records |
//! | [`ports`] | Logger port implemented by the infrastructure layer |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{LogLevel, Logger};
pub use value_objects::{
    ServiceHealth, ServiceLifecycleState, ServiceMetadata, ServiceStatus, ValidationResult,
};
