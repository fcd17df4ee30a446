//! Application Layer - Service Lifecycle Registry
//!
//! This crate orchestrates the lifecycle of named services: it resolves their
//! declared dependency graph, initializes them in order, caches singletons
//! and tears them down again.
//!
//! ## Architecture
//!
//! The application layer:
//! - Defines the [`ports::Service`] contract every managed service implements
//! - Owns per-service lifecycle state ([`lifecycle::ManagedService`])
//! - Resolves initialization order ([`domain_services::dependency_graph`])
//! - Exposes the [`registry::ServiceRegistry`] used by the composition root
//!
//! ## Failure policy
//!
//! Registration and startup are fail-fast. Shutdown is best-effort: every
//! cached service gets its teardown attempt and failures are reported per
//! service.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `svcreg-domain`: For errors, value objects and the logger port
//! - Pure Rust libraries for async, concurrency and downcasting

pub mod domain_services;
pub mod lifecycle;
pub mod ports;
pub mod registry;

pub use domain_services::*;
pub use lifecycle::{ManagedService, ServiceContext, ServiceLogger};
pub use ports::*;
pub use registry::{LifecycleOptions, ServiceRegistry};
