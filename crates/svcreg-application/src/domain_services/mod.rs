//! Domain Services
//!
//! Pure functions over service descriptors, with no registry state.

/// Topological ordering and cycle detection
pub mod dependency_graph;

pub use dependency_graph::{
    find_dependents, resolve_dependency_closure, resolve_initialization_order,
};
