//! Health aggregation
//!
//! Polls the optional health check of every initialized service and folds
//! the answers into a single [`HealthResponse`].

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use svcreg_application::ServiceRegistry;
use svcreg_application::ports::Service;
use svcreg_domain::ServiceHealth;

use crate::constants::HEALTH_UNHEALTHY_MESSAGE;
use crate::logging::log_health_check;
use crate::utils::TimedOperation;

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service reported healthy
    Up,
    /// Service reported unhealthy or did not answer
    Down,
}

impl HealthStatus {
    /// Check if the status indicates the service is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Name of the checked service
    pub name: String,
    /// Current status
    pub status: HealthStatus,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Optional error message
    pub error: Option<String>,
    /// Details reported by the service
    pub details: Option<serde_json::Value>,
}

impl HealthCheck {
    /// Create a successful health check
    pub fn healthy<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Up,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            error: None,
            details: None,
        }
    }

    /// Create a failed health check
    pub fn failed<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Down,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            error,
            details: None,
        }
    }

    /// Translate a service's own health report
    pub fn from_service_health<S: Into<String>>(name: S, health: ServiceHealth) -> Self {
        let check = if health.healthy {
            Self::healthy(name)
        } else {
            Self::failed(name, Some(HEALTH_UNHEALTHY_MESSAGE.to_string()))
        };
        match health.details {
            Some(details) => check.with_details(details),
            None => check,
        }
    }

    /// Set response time
    pub fn with_response_time(mut self, duration: Duration) -> Self {
        self.response_time_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set additional details
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Overall health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall system status
    pub status: HealthStatus,
    /// Timestamp of the health check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Total response time in milliseconds
    pub response_time_ms: u64,
    /// Individual health check results keyed by service name
    pub checks: HashMap<String, HealthCheck>,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthResponse {
    /// Create a new health response
    pub fn new() -> Self {
        Self {
            status: HealthStatus::Up,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            checks: HashMap::new(),
        }
    }

    /// Add a health check result; any down check brings the whole response down
    pub fn add_check(mut self, check: HealthCheck) -> Self {
        if check.status == HealthStatus::Down {
            self.status = HealthStatus::Down;
        }

        self.checks.insert(check.name.clone(), check);
        self
    }

    /// Set response time
    pub fn with_response_time(mut self, duration: Duration) -> Self {
        self.response_time_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Check if the overall system is healthy
    pub fn is_healthy(&self) -> bool {
        self.status.is_healthy()
    }
}

/// Polls every cached service that exposes a health check
///
/// Services are checked one after another in instance insertion order.
/// Services without a health check are left out of the response.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceHealthAggregator {
    check_timeout: Option<Duration>,
}

impl ServiceHealthAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a health check that does not answer within `timeout` as down
    pub fn with_check_timeout(mut self, timeout: Duration) -> Self {
        self.check_timeout = Some(timeout);
        self
    }

    /// Check every initialized service
    pub async fn check(&self, registry: &ServiceRegistry) -> HealthResponse {
        let timer = TimedOperation::start();
        let mut response = HealthResponse::new();

        for name in registry.get_initialized_service_names() {
            // Destroyed since the names were listed
            let Ok(service) = registry.get(&name) else {
                continue;
            };
            if let Some(check) = self.check_one(&name, &*service).await {
                log_health_check(&name, check.status.is_healthy(), check.error.as_deref());
                response = response.add_check(check);
            }
        }

        response.with_response_time(timer.elapsed())
    }

    async fn check_one(&self, name: &str, service: &dyn Service) -> Option<HealthCheck> {
        let timer = TimedOperation::start();
        let outcome = match self.check_timeout {
            None => service.health_check().await,
            Some(limit) => match tokio::time::timeout(limit, service.health_check()).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    let error = format!("Health check timed out after {}ms", limit.as_millis());
                    return Some(
                        HealthCheck::failed(name, Some(error)).with_response_time(timer.elapsed()),
                    );
                }
            },
        };
        outcome.map(|health| {
            HealthCheck::from_service_health(name, health).with_response_time(timer.elapsed())
        })
    }
}
