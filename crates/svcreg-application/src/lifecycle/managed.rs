//! Registry-owned lifecycle wrapper around a service

use std::fmt;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use svcreg_domain::constants::{OPERATION_DESTROY, OPERATION_INITIALIZE};
use svcreg_domain::error::{Error, Result};
use svcreg_domain::ServiceLifecycleState;
use tokio::sync::Mutex;

use super::ServiceContext;
use crate::ports::Service;

/// Lifecycle bookkeeping for one registered service
///
/// `initialize` and `destroy` are idempotent. Transitions of the same
/// service are serialized: the transition lock is held while the hook runs.
pub struct ManagedService {
    service: Arc<dyn Service>,
    state: RwLock<ServiceLifecycleState>,
    transition: Mutex<()>,
}

impl ManagedService {
    /// Wrap a freshly registered service
    pub fn new(service: Arc<dyn Service>) -> Self {
        Self {
            service,
            state: RwLock::new(ServiceLifecycleState::Registered),
            transition: Mutex::new(()),
        }
    }

    /// The wrapped service
    pub fn service(&self) -> &Arc<dyn Service> {
        &self.service
    }

    /// Name declared by the service metadata
    pub fn name(&self) -> &str {
        &self.service.metadata().name
    }

    /// Current lifecycle state
    pub fn state(&self) -> ServiceLifecycleState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_initialized(&self) -> bool {
        self.state().is_initialized()
    }

    fn set_state(&self, state: ServiceLifecycleState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Run `on_initialize` unless the service is already initialized
    ///
    /// On failure the state returns to where it was before the call and the
    /// hook error is returned unchanged.
    pub async fn initialize(
        &self,
        context: &ServiceContext<'_>,
        timeout: Option<Duration>,
    ) -> Result<()> {
        let _transition = self.transition.lock().await;
        let previous = self.state();
        if previous.is_initialized() {
            return Ok(());
        }

        self.set_state(ServiceLifecycleState::Initializing);
        let hook = self.service.on_initialize(context);
        match bounded(self.name(), OPERATION_INITIALIZE, timeout, hook).await {
            Ok(()) => {
                self.set_state(ServiceLifecycleState::Initialized);
                Ok(())
            }
            Err(e) => {
                self.set_state(previous);
                Err(e)
            }
        }
    }

    /// Run `on_destroy` if the service is initialized
    ///
    /// A failed teardown leaves the service initialized.
    pub async fn destroy(&self, timeout: Option<Duration>) -> Result<()> {
        let _transition = self.transition.lock().await;
        if !self.state().is_initialized() {
            return Ok(());
        }

        self.set_state(ServiceLifecycleState::Destroying);
        let hook = self.service.on_destroy();
        match bounded(self.name(), OPERATION_DESTROY, timeout, hook).await {
            Ok(()) => {
                self.set_state(ServiceLifecycleState::Destroyed);
                Ok(())
            }
            Err(e) => {
                self.set_state(ServiceLifecycleState::Initialized);
                Err(e)
            }
        }
    }
}

async fn bounded<F>(service: &str, operation: &str, timeout: Option<Duration>, hook: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    match timeout {
        None => hook.await,
        Some(limit) => tokio::time::timeout(limit, hook)
            .await
            .unwrap_or_else(|_| Err(Error::timeout(service, operation, limit))),
    }
}

impl fmt::Debug for ManagedService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedService")
            .field("name", &self.name())
            .field("state", &self.state())
            .finish()
    }
}
