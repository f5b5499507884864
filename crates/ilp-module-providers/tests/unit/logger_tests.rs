//! Tests for the console and debug loggers

use ilp_module_domain::value_objects::Capability;
use ilp_module_domain::{Logger, ModuleInstance, ModuleOptions, RoleType};
use ilp_module_providers::loggers::{ConsoleLogger, DebugLogger, LoggerOptions};

use crate::common::loader;

#[test]
fn test_logger_keeps_namespace() {
    let logger = ConsoleLogger::new(LoggerOptions {
        namespace: "ilp-connector".to_string(),
    });
    assert_eq!(logger.namespace(), "ilp-connector");

    let logger = DebugLogger::new(LoggerOptions {
        namespace: "ilp-connector".to_string(),
    });
    assert_eq!(logger.namespace(), "ilp-connector");
}

#[test]
fn test_create_console_logger_by_name() {
    let logger = loader()
        .create_custom_logger(
            "console",
            Some(ModuleOptions::new().with("namespace", "custom")),
            None,
        )
        .expect("console logger is built in");

    assert_eq!(logger.namespace(), "custom");
    assert!(logger.downcast_arc::<ConsoleLogger>().is_ok());
}

#[test]
fn test_create_logger_uses_namespace() {
    let logger = loader()
        .create_logger("ilp-test")
        .expect("default logger is built in");
    assert_eq!(logger.namespace(), "ilp-test");
}

#[test]
fn test_logger_without_namespace_is_not_valid() {
    let loader = loader();
    let err = loader
        .create_custom_logger("debug", Some(ModuleOptions::new()), None)
        .expect_err("empty namespace fails validation");
    assert!(err.to_string().contains("not a valid logger"));

    let instance = ModuleInstance::logger(DebugLogger::new(LoggerOptions::default()));
    assert!(!instance.capabilities().contains(&Capability::Namespace));
    assert!(!loader.validate_instance(&RoleType::LOGGER, &instance));
}
