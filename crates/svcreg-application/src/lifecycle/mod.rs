//! Service Lifecycle
//!
//! The registry wraps every service in a [`ManagedService`] that tracks its
//! lifecycle state, and builds a fresh [`ServiceContext`] for each
//! initialization call.

/// Per-initialization context and name-bound logger
pub mod context;
/// Lifecycle wrapper owned by the registry
pub mod managed;

pub use context::{ServiceContext, ServiceLogger};
pub use managed::ManagedService;
