//! Health aggregation tests

use std::sync::Arc;
use std::time::Duration;

use svcreg_application::ServiceRegistry;
use svcreg_domain::ServiceHealth;
use svcreg_infrastructure::health::{
    HealthCheck, HealthResponse, HealthStatus, ServiceHealthAggregator,
};

use crate::test_services::{CheckedService, HealthAnswer};

async fn initialized_registry(services: Vec<CheckedService>) -> ServiceRegistry {
    let registry = ServiceRegistry::new((), None);
    for service in services {
        registry.register_service(Arc::new(service)).unwrap();
    }
    registry.initialize_all_services().await.unwrap();
    registry
}

#[test]
fn test_health_response_aggregation() {
    let response = HealthResponse::new()
        .add_check(HealthCheck::healthy("check1"))
        .add_check(HealthCheck::healthy("check2"));

    assert_eq!(response.status, HealthStatus::Up);
    assert_eq!(response.checks.len(), 2);

    let down = response.add_check(HealthCheck::failed("check3", Some("boom".to_string())));
    assert_eq!(down.status, HealthStatus::Down);
    assert!(!down.is_healthy());
}

#[test]
fn test_down_check_is_not_overridden_by_later_healthy_checks() {
    let response = HealthResponse::new()
        .add_check(HealthCheck::failed("db", None))
        .add_check(HealthCheck::healthy("cache"));

    assert_eq!(response.status, HealthStatus::Down);
    assert_eq!(response.checks.len(), 2);
}

#[test]
fn test_status_deserializes_only_up_and_down() {
    let up: HealthStatus = serde_json::from_str("\"up\"").unwrap();
    let down: HealthStatus = serde_json::from_str("\"down\"").unwrap();

    assert_eq!(up, HealthStatus::Up);
    assert_eq!(down, HealthStatus::Down);
    assert!(serde_json::from_str::<HealthStatus>("\"degraded\"").is_err());
}

#[test]
fn test_check_from_service_health() {
    let check = HealthCheck::from_service_health("db", ServiceHealth::healthy());
    assert_eq!(check.status, HealthStatus::Up);
    assert!(check.error.is_none());

    let check = HealthCheck::from_service_health(
        "db",
        ServiceHealth::unhealthy().with_details(serde_json::json!({ "lag": 12 })),
    );
    assert_eq!(check.status, HealthStatus::Down);
    assert!(check.error.is_some());
    assert_eq!(check.details, Some(serde_json::json!({ "lag": 12 })));
}

#[tokio::test]
async fn test_aggregator_skips_services_without_health_check() {
    let registry = initialized_registry(vec![
        CheckedService::new("db", HealthAnswer::Healthy),
        CheckedService::new("cache", HealthAnswer::None),
    ])
    .await;

    let response = ServiceHealthAggregator::new().check(&registry).await;

    assert!(response.is_healthy());
    assert_eq!(response.checks.len(), 1);
    assert!(response.checks.contains_key("db"));
}

#[tokio::test]
async fn test_aggregator_reports_down_when_any_check_fails() {
    let registry = initialized_registry(vec![
        CheckedService::new("db", HealthAnswer::Healthy),
        CheckedService::new("ai", HealthAnswer::Unhealthy),
    ])
    .await;

    let response = ServiceHealthAggregator::new().check(&registry).await;

    assert_eq!(response.status, HealthStatus::Down);
    assert_eq!(response.checks["db"].status, HealthStatus::Up);
    assert_eq!(response.checks["ai"].status, HealthStatus::Down);
    assert_eq!(
        response.checks["ai"].details,
        Some(serde_json::json!({ "pool": "exhausted" }))
    );
}

#[tokio::test]
async fn test_aggregator_ignores_uninitialized_services() {
    let registry = ServiceRegistry::new((), None);
    registry
        .register_service(Arc::new(CheckedService::new("db", HealthAnswer::Unhealthy)))
        .unwrap();

    let response = ServiceHealthAggregator::new().check(&registry).await;

    assert!(response.is_healthy());
    assert!(response.checks.is_empty());
}

#[tokio::test]
async fn test_hanging_check_times_out() {
    let registry = initialized_registry(vec![CheckedService::new("slow", HealthAnswer::Hanging)]).await;

    let response = ServiceHealthAggregator::new()
        .with_check_timeout(Duration::from_millis(20))
        .check(&registry)
        .await;

    assert_eq!(response.status, HealthStatus::Down);
    let check = &response.checks["slow"];
    assert!(check.error.as_deref().unwrap().contains("timed out"));
}

#[test]
fn test_health_response_serializes_lowercase_status() {
    let response = HealthResponse::new().add_check(HealthCheck::healthy("db"));

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["status"], "up");
    assert_eq!(json["checks"]["db"]["status"], "up");
}
