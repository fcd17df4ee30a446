//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the registry.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML and environment configuration through figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`health`] | Aggregated service health checks |
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Composition Root
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Registry construction and shutdown |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod health;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use bootstrap::{ShutdownReport, build_registry, shutdown_registry};
pub use config::{ConfigLoader, RegistryConfig};
pub use error_ext::ErrorContext;
pub use health::{HealthResponse, HealthStatus, ServiceHealthAggregator};
pub use logging::TracingLogger;
pub use utils::TimedOperation;
