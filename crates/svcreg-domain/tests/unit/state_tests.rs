//! Unit tests for the lifecycle state value object

use svcreg_domain::ServiceLifecycleState;

#[test]
fn test_default_state_is_registered() {
    assert_eq!(
        ServiceLifecycleState::default(),
        ServiceLifecycleState::Registered
    );
}

#[test]
fn test_only_initialized_counts_as_initialized() {
    assert!(ServiceLifecycleState::Initialized.is_initialized());
    assert!(!ServiceLifecycleState::Registered.is_initialized());
    assert!(!ServiceLifecycleState::Initializing.is_initialized());
    assert!(!ServiceLifecycleState::Destroying.is_initialized());
    assert!(!ServiceLifecycleState::Destroyed.is_initialized());
}

#[test]
fn test_transitioning_states() {
    assert!(ServiceLifecycleState::Initializing.is_transitioning());
    assert!(ServiceLifecycleState::Destroying.is_transitioning());
    assert!(!ServiceLifecycleState::Initialized.is_transitioning());
}

#[test]
fn test_state_display() {
    assert_eq!(ServiceLifecycleState::Destroyed.to_string(), "destroyed");
    assert_eq!(ServiceLifecycleState::Initializing.to_string(), "initializing");
}

#[test]
fn test_state_serialization() {
    let json = serde_json::to_string(&ServiceLifecycleState::Initialized)
        .expect("serialization failed");
    assert!(json.contains("Initialized"));

    let deserialized: ServiceLifecycleState =
        serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(deserialized, ServiceLifecycleState::Initialized);
}
