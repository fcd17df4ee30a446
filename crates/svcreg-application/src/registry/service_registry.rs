//! Service Registry
//!
//! Central owner of every registered service: registration with dependency
//! checks, dependency-ordered initialization, singleton caching, reverse-order
//! teardown and introspection.
//!
//! The registry is a cheap handle over shared state. No map guard is held
//! across an `.await`, so services may call back into the registry from
//! their hooks (for example `context.registry().get("db")`). A hook that
//! asks for its own service, or for a dependent of it, gets
//! [`Error::CircularDependency`] instead of waiting on itself.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use svcreg_domain::error::{Error, Result};
use svcreg_domain::ports::Logger;
use svcreg_domain::{ServiceLifecycleState, ServiceMetadata, ServiceStatus, ValidationResult};
use tracing::{debug, error, info, warn};

use super::options::LifecycleOptions;
use super::validation::validate_metadata;
use crate::domain_services::{resolve_dependency_closure, resolve_initialization_order};
use crate::lifecycle::{ManagedService, ServiceContext, ServiceLogger};
use crate::ports::Service;

tokio::task_local! {
    /// Services whose `on_initialize` is running further up this call chain
    static INITIALIZING: Vec<String>;
}

/// Names initializing above the current call, outermost first
fn initializing_chain() -> Vec<String> {
    INITIALIZING.try_with(Clone::clone).unwrap_or_default()
}

/// Cycle formed by re-entering `blocked` while initializing `requested`
///
/// `None` when `blocked` is not initializing above the current call.
fn reentry_cycle(chain: &[String], requested: &str, blocked: &str) -> Option<Vec<String>> {
    let start = chain.iter().position(|name| name == blocked)?;
    let mut cycle = chain[start..].to_vec();
    if requested != blocked && chain.last().is_none_or(|last| last != requested) {
        cycle.push(requested.to_string());
    }
    cycle.push(blocked.to_string());
    Some(cycle)
}

struct RegisteredService {
    metadata: ServiceMetadata,
    managed: ManagedService,
    sequence: u64,
}

#[derive(Clone)]
struct CachedInstance {
    service: Arc<dyn Service>,
    sequence: u64,
}

struct RegistryInner {
    config: Arc<dyn Any + Send + Sync>,
    logger: Option<Arc<dyn Logger>>,
    options: LifecycleOptions,
    services: DashMap<String, Arc<RegisteredService>>,
    instances: DashMap<String, CachedInstance>,
    /// Shared counter for registration and instance insertion order
    sequence: AtomicU64,
}

/// Registry of named services and their lifecycle
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use svcreg_application::ports::Service;
/// use svcreg_application::registry::ServiceRegistry;
///
/// # async fn run(db: Arc<dyn Service>, ai: Arc<dyn Service>) -> svcreg_domain::Result<()> {
/// let registry = ServiceRegistry::new((), None);
/// registry.register_service(db)?;
/// registry.register_service(ai)?;
///
/// let order = registry.initialize_all_services().await?;
/// println!("started {order:?}");
///
/// for (name, result) in registry.destroy_all_services().await {
///     if let Err(e) = result {
///         eprintln!("{name}: {e}");
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ServiceRegistry {
    inner: Arc<RegistryInner>,
}

impl ServiceRegistry {
    /// Create a registry with default lifecycle options
    ///
    /// `config` is handed to every service untouched; services read it back
    /// with [`ServiceContext::config`].
    pub fn new<C: Any + Send + Sync>(config: C, logger: Option<Arc<dyn Logger>>) -> Self {
        Self::with_options(config, logger, LifecycleOptions::default())
    }

    /// Create a registry with explicit lifecycle options
    pub fn with_options<C: Any + Send + Sync>(
        config: C,
        logger: Option<Arc<dyn Logger>>,
        options: LifecycleOptions,
    ) -> Self {
        Self::with_shared_config(Arc::new(config), logger, options)
    }

    /// Create a registry around configuration that is already shared
    pub fn with_shared_config(
        config: Arc<dyn Any + Send + Sync>,
        logger: Option<Arc<dyn Logger>>,
        options: LifecycleOptions,
    ) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                config,
                logger,
                options,
                services: DashMap::new(),
                instances: DashMap::new(),
                sequence: AtomicU64::new(0),
            }),
        }
    }

    /// Lifecycle options in effect
    pub fn options(&self) -> LifecycleOptions {
        self.inner.options
    }

    /// Register a service without initializing it
    ///
    /// Every declared dependency must already be registered.
    pub fn register_service(&self, service: Arc<dyn Service>) -> Result<()> {
        let metadata = service.metadata().clone();
        let name = metadata.name.clone();

        if self.inner.services.contains_key(&name) {
            return Err(Error::duplicate_registration(name));
        }
        if let Some(missing) = metadata
            .dependencies
            .iter()
            .find(|dependency| !self.inner.services.contains_key(dependency.as_str()))
        {
            return Err(Error::missing_dependency(&name, missing));
        }

        let sequence = self.next_sequence();
        let version = metadata.version.clone();
        match self.inner.services.entry(name.clone()) {
            Entry::Occupied(_) => return Err(Error::duplicate_registration(name)),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(RegisteredService {
                    metadata,
                    managed: ManagedService::new(service),
                    sequence,
                }));
            }
        }

        info!(service = %name, version = %version, "Service registered");
        Ok(())
    }

    /// Initialize one service, its dependencies first
    ///
    /// Already cached services are skipped, so calling this for a running
    /// service is a no-op.
    pub async fn initialize_service(&self, name: &str) -> Result<()> {
        if self.inner.instances.contains_key(name) {
            return Ok(());
        }
        if !self.inner.services.contains_key(name) {
            return Err(Error::service_not_found(name));
        }

        let closure = resolve_dependency_closure(&self.descriptors(), name)?;
        let chain = initializing_chain();
        if let Some(cycle) = closure
            .iter()
            .filter(|service_name| !self.inner.instances.contains_key(service_name.as_str()))
            .find_map(|service_name| reentry_cycle(&chain, name, service_name))
        {
            warn!(service = %name, cycle = ?cycle, "Service re-entered its own initialization");
            return Err(Error::circular_dependency(cycle));
        }

        for service_name in closure {
            if self.inner.instances.contains_key(service_name.as_str()) {
                continue;
            }
            let registered = self.registered(&service_name)?;
            self.initialize_registered(&registered).await?;
        }
        Ok(())
    }

    /// Initialize every registered service in dependency order
    ///
    /// Stops at the first failure; services initialized before it stay
    /// initialized. Returns the computed order.
    pub async fn initialize_all_services(&self) -> Result<Vec<String>> {
        let order = self.initialization_order()?;
        info!(services = order.len(), "Initializing services");

        let started = Instant::now();
        for name in &order {
            if self.inner.instances.contains_key(name.as_str()) {
                continue;
            }
            let registered = self.registered(name)?;
            self.initialize_registered(&registered).await?;
        }

        info!(
            services = order.len(),
            elapsed_ms = elapsed_ms(started),
            "All services initialized"
        );
        Ok(order)
    }

    async fn initialize_registered(&self, registered: &RegisteredService) -> Result<()> {
        let name = registered.metadata.name.as_str();
        let mut chain = initializing_chain();
        if let Some(cycle) = reentry_cycle(&chain, name, name) {
            warn!(service = %name, cycle = ?cycle, "Service re-entered its own initialization");
            return Err(Error::circular_dependency(cycle));
        }
        chain.push(name.to_string());

        let was_initialized = registered.managed.is_initialized();
        let started = Instant::now();

        let context = ServiceContext::new(
            Arc::clone(&self.inner.config),
            ServiceLogger::new(name, self.inner.logger.clone()),
            self,
        );

        if !was_initialized {
            debug!(service = %name, "Initializing service");
        }
        let initialize = registered
            .managed
            .initialize(&context, self.inner.options.initialize_timeout);
        if let Err(e) = INITIALIZING.scope(chain, initialize).await {
            error!(service = %name, error = %e, "Service initialization failed");
            return Err(Error::initialization_failure(name, e));
        }

        if registered.metadata.singleton {
            self.inner
                .instances
                .entry(name.to_string())
                .or_insert_with(|| CachedInstance {
                    service: Arc::clone(registered.managed.service()),
                    sequence: self.next_sequence(),
                });
        }

        if !was_initialized {
            info!(service = %name, elapsed_ms = elapsed_ms(started), "Service initialized");
        }
        Ok(())
    }

    /// Cached instance of an initialized singleton
    pub fn get(&self, name: &str) -> Result<Arc<dyn Service>> {
        self.inner
            .instances
            .get(name)
            .map(|instance| Arc::clone(&instance.service))
            .ok_or_else(|| Error::service_not_initialized(name))
    }

    /// Cached instance downcast to its concrete type
    pub fn get_as<T: Service>(&self, name: &str) -> Result<Arc<T>> {
        self.get(name)?
            .downcast_arc::<T>()
            .map_err(|_| Error::invalid_service_type(name, type_name::<T>()))
    }

    /// Whether a service with this name is registered
    pub fn has(&self, name: &str) -> bool {
        self.inner.services.contains_key(name)
    }

    /// Registered service names in registration order
    pub fn get_service_names(&self) -> Vec<String> {
        self.registered_in_order()
            .into_iter()
            .map(|registered| registered.metadata.name.clone())
            .collect()
    }

    /// Cached service names in instance insertion order
    pub fn get_initialized_service_names(&self) -> Vec<String> {
        let mut instances: Vec<(u64, String)> = self
            .inner
            .instances
            .iter()
            .map(|entry| (entry.value().sequence, entry.key().clone()))
            .collect();
        instances.sort_unstable_by_key(|(sequence, _)| *sequence);
        instances.into_iter().map(|(_, name)| name).collect()
    }

    pub fn get_service_metadata(&self, name: &str) -> Option<ServiceMetadata> {
        self.inner
            .services
            .get(name)
            .map(|registered| registered.metadata.clone())
    }

    /// Metadata of every registered service in registration order
    pub fn get_all_service_metadata(&self) -> Vec<ServiceMetadata> {
        self.descriptors()
    }

    /// Lifecycle state tracked for a registered service
    pub fn service_state(&self, name: &str) -> Option<ServiceLifecycleState> {
        self.inner
            .services
            .get(name)
            .map(|registered| registered.managed.state())
    }

    /// Dependency order over every registered service, without initializing
    pub fn initialization_order(&self) -> Result<Vec<String>> {
        resolve_initialization_order(&self.descriptors())
    }

    /// Tear down one cached service
    ///
    /// The instance is dropped from the cache even when `on_destroy` fails.
    pub async fn destroy_service(&self, name: &str) -> Result<()> {
        let result = self.destroy_cached(name).await;
        if let Err(e) = &result {
            error!(service = %name, error = %e, "Service destruction failed");
        }
        result
    }

    /// Tear down every cached service in reverse insertion order
    ///
    /// Failures are logged and do not stop the loop. Returns the outcome for
    /// each service in the order attempted.
    pub async fn destroy_all_services(&self) -> Vec<(String, Result<()>)> {
        let names = self.get_initialized_service_names();
        info!(services = names.len(), "Destroying services");

        let mut results = Vec::with_capacity(names.len());
        for name in names.into_iter().rev() {
            let result = self.destroy_cached(&name).await;
            if let Err(e) = &result {
                warn!(service = %name, error = %e, "Failed to destroy service, continuing shutdown");
            }
            results.push((name, result));
        }
        results
    }

    async fn destroy_cached(&self, name: &str) -> Result<()> {
        if !self.inner.instances.contains_key(name) {
            return Ok(());
        }
        let registered = self.registered(name)?;
        let started = Instant::now();

        let outcome = registered
            .managed
            .destroy(self.inner.options.destroy_timeout)
            .await;
        self.inner.instances.remove(name);

        match outcome {
            Ok(()) => {
                info!(service = %name, elapsed_ms = elapsed_ms(started), "Service destroyed");
                Ok(())
            }
            Err(e) => Err(Error::destruction_failure(name, e)),
        }
    }

    /// Destroy and re-initialize a service
    pub async fn reload_service(&self, name: &str) -> Result<()> {
        if !self.has(name) {
            return Err(Error::service_not_found(name));
        }
        info!(service = %name, "Reloading service");
        self.destroy_service(name).await?;
        self.initialize_service(name).await
    }

    /// Pre-registration sanity check of a service descriptor
    pub fn validate_service(service: &dyn Service) -> ValidationResult {
        validate_metadata(service.metadata())
    }

    /// Diagnostic snapshot of every registered service
    pub fn get_service_status(&self) -> Vec<ServiceStatus> {
        self.registered_in_order()
            .into_iter()
            .map(|registered| ServiceStatus {
                name: registered.metadata.name.clone(),
                version: registered.metadata.version.clone(),
                registered: true,
                initialized: self
                    .inner
                    .instances
                    .contains_key(registered.metadata.name.as_str()),
                state: registered.managed.state(),
                singleton: registered.metadata.singleton,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.services.is_empty()
    }

    fn next_sequence(&self) -> u64 {
        self.inner.sequence.fetch_add(1, Ordering::Relaxed)
    }

    fn registered(&self, name: &str) -> Result<Arc<RegisteredService>> {
        self.inner
            .services
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| Error::service_not_found(name))
    }

    fn registered_in_order(&self) -> Vec<Arc<RegisteredService>> {
        let mut services: Vec<Arc<RegisteredService>> = self
            .inner
            .services
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        services.sort_unstable_by_key(|registered| registered.sequence);
        services
    }

    fn descriptors(&self) -> Vec<ServiceMetadata> {
        self.registered_in_order()
            .into_iter()
            .map(|registered| registered.metadata.clone())
            .collect()
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.get_service_names())
            .field("initialized", &self.get_initialized_service_names())
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}
