//! Application Port Interfaces
//!
//! - **service.rs** - Lifecycle contract implemented by every managed service

/// Service lifecycle contract
pub mod service;

pub use service::Service;
