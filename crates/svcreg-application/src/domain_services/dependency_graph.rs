//! Dependency graph resolution
//!
//! Orders service descriptors so that every service comes after all of its
//! declared dependencies, using a post-order depth-first traversal with
//! three-color marking to detect cycles.
//!
//! Traversal order is deterministic: roots are visited in the order the
//! descriptors are given and dependencies in their declared order. Two
//! services without a path between them therefore keep their relative input
//! order whenever neither is pulled forward as someone's dependency.

use std::collections::HashMap;

use svcreg_domain::ServiceMetadata;
use svcreg_domain::error::{Error, Result};

/// Order every descriptor after its dependencies
///
/// Any cycle aborts the whole ordering; there is no partial result.
pub fn resolve_initialization_order(descriptors: &[ServiceMetadata]) -> Result<Vec<String>> {
    let graph = DependencyGraph::new(descriptors);
    let mut walk = Walk::default();
    for descriptor in descriptors {
        graph.visit(&descriptor.name, None, &mut walk)?;
    }
    Ok(walk.order)
}

/// Transitive dependencies of `name` in initialization order, followed by `name`
pub fn resolve_dependency_closure(descriptors: &[ServiceMetadata], name: &str) -> Result<Vec<String>> {
    let graph = DependencyGraph::new(descriptors);
    let mut walk = Walk::default();
    graph.visit(name, None, &mut walk)?;
    Ok(walk.order)
}

/// Services declaring a direct dependency on `name`, in input order
pub fn find_dependents(descriptors: &[ServiceMetadata], name: &str) -> Vec<String> {
    descriptors
        .iter()
        .filter(|descriptor| descriptor.depends_on(name))
        .map(|descriptor| descriptor.name.clone())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Visited,
}

#[derive(Default)]
struct Walk<'a> {
    marks: HashMap<&'a str, Mark>,
    /// Nodes currently on the DFS stack
    path: Vec<&'a str>,
    order: Vec<String>,
}

/// `edges[A] = [B, C]` means A depends on B and C
struct DependencyGraph<'a> {
    edges: HashMap<&'a str, &'a [String]>,
}

impl<'a> DependencyGraph<'a> {
    fn new(descriptors: &'a [ServiceMetadata]) -> Self {
        let edges = descriptors
            .iter()
            .map(|descriptor| (descriptor.name.as_str(), descriptor.dependencies.as_slice()))
            .collect();
        Self { edges }
    }

    fn visit(&self, node: &str, dependent: Option<&str>, walk: &mut Walk<'a>) -> Result<()> {
        let Some((&node, &dependencies)) = self.edges.get_key_value(node) else {
            return Err(match dependent {
                Some(dependent) => Error::missing_dependency(dependent, node),
                None => Error::service_not_found(node),
            });
        };

        match walk.marks.get(node) {
            Some(Mark::Visited) => return Ok(()),
            Some(Mark::Visiting) => return Err(Error::circular_dependency(cycle_from(&walk.path, node))),
            None => {}
        }

        walk.marks.insert(node, Mark::Visiting);
        walk.path.push(node);

        for dependency in dependencies {
            self.visit(dependency, Some(node), walk)?;
        }

        walk.path.pop();
        walk.marks.insert(node, Mark::Visited);
        walk.order.push(node.to_string());
        Ok(())
    }
}

/// Cycle path starting and ending at `node`
fn cycle_from(path: &[&str], node: &str) -> Vec<String> {
    let start = path.iter().position(|n| *n == node).unwrap_or(0);
    let mut cycle: Vec<String> = path[start..].iter().map(|n| (*n).to_string()).collect();
    cycle.push(node.to_string());
    cycle
}
