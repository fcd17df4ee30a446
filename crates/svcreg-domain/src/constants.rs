//! Domain layer constants
//!
//! Infrastructure-specific constants remain in `svcreg_infrastructure::constants`.

// ============================================================================
// SERVICE DESCRIPTOR CONSTANTS
// ============================================================================

/// Priority assigned when a descriptor does not set one
pub const DEFAULT_SERVICE_PRIORITY: i32 = 0;

// ============================================================================
// LIFECYCLE OPERATION NAMES
// ============================================================================

/// Operation label used in timeout errors for initialization
pub const OPERATION_INITIALIZE: &str = "initialize";

/// Operation label used in timeout errors for teardown
pub const OPERATION_DESTROY: &str = "destroy";
