//! Configuration
//!
//! - **types/** - Serializable configuration sections
//! - **loader.rs** - Figment based loading, validation and saving

/// Configuration loader
pub mod loader;
/// Configuration data types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{LifecycleConfig, LoggingConfig, RegistryConfig};
