//! Pre-registration sanity checks

use std::collections::HashSet;

use svcreg_domain::{ServiceMetadata, ValidationResult};

/// Check a descriptor without touching any registry
///
/// Never fails; problems are reported in the returned [`ValidationResult`].
pub fn validate_metadata(metadata: &ServiceMetadata) -> ValidationResult {
    let mut errors = Vec::new();

    if metadata.name.trim().is_empty() {
        errors.push("Service name must be a non-empty string".to_string());
    }
    if metadata.version.trim().is_empty() {
        errors.push(format!(
            "Service '{}' version must be a non-empty string",
            metadata.name
        ));
    }

    let mut seen = HashSet::new();
    for dependency in &metadata.dependencies {
        if dependency.trim().is_empty() {
            errors.push(format!(
                "Service '{}' declares an empty dependency name",
                metadata.name
            ));
        } else if *dependency == metadata.name {
            errors.push(format!("Service '{}' depends on itself", metadata.name));
        } else if !seen.insert(dependency.as_str()) {
            errors.push(format!(
                "Service '{}' declares dependency '{}' more than once",
                metadata.name, dependency
            ));
        }
    }

    ValidationResult::from_errors(errors)
}
