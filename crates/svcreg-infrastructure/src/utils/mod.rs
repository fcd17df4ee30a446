//! Utility helpers

/// Timing instrumentation
pub mod timing;

pub use timing::TimedOperation;
