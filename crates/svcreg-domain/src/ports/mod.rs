//! Domain Port Interfaces
//!
//! Boundary contracts implemented outside the domain layer. The service
//! lifecycle port itself lives in the application layer because it needs the
//! registry-backed context.

/// Structured logger handed to services
pub mod logger;

pub use logger::{LogLevel, Logger};
