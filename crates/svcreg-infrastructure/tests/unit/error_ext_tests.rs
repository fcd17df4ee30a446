//! Error context extension tests

use std::error::Error as _;
use std::io;

use svcreg_domain::Error;
use svcreg_infrastructure::ErrorContext;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "svcreg.toml"))
}

#[test]
fn test_context_wraps_as_internal() {
    let err = io_failure().context("Failed to read config").unwrap_err();

    assert!(matches!(err, Error::Internal { .. }));
    assert!(err.to_string().contains("Failed to read config: svcreg.toml"));
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let err = io_failure()
        .with_context(|| format!("attempt {}", 3))
        .unwrap_err();
    assert!(err.to_string().contains("attempt 3"));
}

#[test]
fn test_config_context_keeps_source() {
    let err = "abc"
        .parse::<u64>()
        .config_context("initialize_timeout_ms")
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.source().is_some());
}

#[test]
fn test_service_context() {
    let err = io_failure().service_context("db connect").unwrap_err();

    assert!(matches!(err, Error::Service { .. }));
    assert!(err.source().is_some());
}
