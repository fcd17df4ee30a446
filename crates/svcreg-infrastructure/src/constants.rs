//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `svcreg_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "svcreg.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "svcreg";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SVCREG";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "SVCREG_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log file name stem used when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "svcreg";

/// Log rotation size (10MB)
pub const LOG_ROTATION_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum number of log files to keep
pub const LOG_MAX_FILES: usize = 5;

// ============================================================================
// HEALTH CHECK CONSTANTS
// ============================================================================

/// Error reported for a service that answered unhealthy without details
pub const HEALTH_UNHEALTHY_MESSAGE: &str = "Service reported unhealthy";
