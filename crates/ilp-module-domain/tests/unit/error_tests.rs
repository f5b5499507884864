//! Error message tests

use std::path::PathBuf;

use ilp_module_domain::Error;

#[test]
fn test_unknown_role_message() {
    let err = Error::unknown_role("widget");
    assert_eq!(
        err.to_string(),
        "'widget' is not a known ILP module type (or no default module found for this type)."
    );
}

#[test]
fn test_module_not_found_message_names_path() {
    let err = Error::module_not_found("store", "redis", PathBuf::from("/app/stores/redis"));
    let message = err.to_string();
    assert!(message.contains("name=redis"));
    assert!(message.contains("path=/app/stores/redis"));
}

#[test]
fn test_invalid_module_message() {
    let err = Error::invalid_module("invalid-plugin", "plugin");
    assert_eq!(
        err.to_string(),
        "Loaded a module named invalid-plugin but it is not a valid plugin."
    );
}

#[test]
fn test_malformed_options_keeps_source() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = Error::malformed_environment_options("ILP_STORE_OPTIONS", source);
    assert!(err.to_string().contains("ILP_STORE_OPTIONS"));
    assert!(std::error::Error::source(&err).is_some());
}
