//! Tests for the service context and name-bound logger

use std::sync::Arc;

use serde_json::json;
use svcreg_application::ServiceRegistry;
use svcreg_application::lifecycle::ServiceLogger;
use svcreg_domain::Error;
use svcreg_domain::ports::{LogLevel, Logger};

use crate::test_services::{AppConfig, ConfigReader, EventLog, RecordingLogger, TestService};

#[test]
fn test_service_logger_prefixes_messages() {
    let recorder = Arc::new(RecordingLogger::default());
    let logger = ServiceLogger::new("db", Some(recorder.clone() as Arc<dyn Logger>));

    logger.info("connected");
    logger.warn(String::from("slow query"));
    logger.error_with("lost connection", &json!({ "retries": 3 }));

    let records = recorder.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].0, LogLevel::Info);
    assert_eq!(records[0].1, "[db] connected");
    assert_eq!(records[1].0, LogLevel::Warn);
    assert_eq!(records[1].1, "[db] slow query");
    assert_eq!(records[2].0, LogLevel::Error);
    assert_eq!(records[2].2, Some(json!({ "retries": 3 })));
    assert!(logger.is_enabled());
    assert_eq!(logger.service_name(), "db");
}

#[test]
fn test_disabled_logger_is_silent() {
    let logger = ServiceLogger::disabled("cache");

    logger.debug("nothing happens");

    assert!(!logger.is_enabled());
    assert_eq!(logger.service_name(), "cache");
}

#[tokio::test]
async fn test_context_carries_config_and_logger() {
    let recorder = Arc::new(RecordingLogger::default());
    let registry = ServiceRegistry::new(
        AppConfig {
            database_url: "postgres://localhost/app".to_string(),
        },
        Some(recorder.clone() as Arc<dyn Logger>),
    );
    let reader = Arc::new(ConfigReader::new("reader"));
    registry.register_service(reader.clone()).unwrap();

    registry.initialize_service("reader").await.unwrap();

    assert_eq!(
        reader.seen.lock().unwrap().as_deref(),
        Some("postgres://localhost/app")
    );
    let records = recorder.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].1, "[reader] configured");
    assert_eq!(
        records[0].2,
        Some(json!({ "url": "postgres://localhost/app" }))
    );
}

#[tokio::test]
async fn test_config_of_wrong_type_fails_initialization() {
    let registry = ServiceRegistry::new(42_u32, None);
    registry
        .register_service(Arc::new(ConfigReader::new("reader")))
        .unwrap();

    let err = registry.initialize_service("reader").await.unwrap_err();

    match err {
        Error::InitializationFailure { service, source } => {
            assert_eq!(service, "reader");
            assert!(matches!(*source, Error::Configuration { .. }));
        }
        other => panic!("Expected InitializationFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_hooks_without_logger_do_not_log() {
    let log = EventLog::default();
    let registry = ServiceRegistry::new((), None);
    registry
        .register_service(TestService::new("db", &[], &log).shared())
        .unwrap();

    registry.initialize_all_services().await.unwrap();

    assert_eq!(log.events(), vec!["init:db"]);
}
