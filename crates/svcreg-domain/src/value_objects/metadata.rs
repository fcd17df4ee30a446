//! Service descriptor value object

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SERVICE_PRIORITY;

/// Static metadata describing a service
///
/// Descriptors are created once by the composition root and never mutated
/// afterwards. The registry keys everything by [`ServiceMetadata::name`].
///
/// # Example
///
/// ```
/// use svcreg_domain::ServiceMetadata;
///
/// let metadata = ServiceMetadata::new("ai", "1.2.0").with_dependencies(["db"]);
/// assert_eq!(metadata.dependencies, vec!["db".to_string()]);
/// assert!(metadata.singleton);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetadata {
    /// Unique service name
    pub name: String,
    /// Informational version string
    pub version: String,
    /// Names of services that must be initialized first, in declared order
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Whether the initialized instance is cached by the registry
    #[serde(default = "default_singleton")]
    pub singleton: bool,
    /// Reserved ordering hint, not used by the resolver
    #[serde(default)]
    pub priority: i32,
}

fn default_singleton() -> bool {
    true
}

impl ServiceMetadata {
    /// Create metadata for a singleton service without dependencies
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies: Vec::new(),
            singleton: true,
            priority: DEFAULT_SERVICE_PRIORITY,
        }
    }

    /// Set the declared dependencies
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single dependency
    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    /// Set the singleton flag
    pub fn with_singleton(mut self, singleton: bool) -> Self {
        self.singleton = singleton;
        self
    }

    /// Set the priority hint
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the service declares a direct dependency on `name`
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == name)
    }
}
