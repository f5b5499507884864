//! Bootstrap of the framework logger

use std::sync::Arc;

use ilp_module_application::FallbackLogger;
use ilp_module_domain::MapEnvironment;

use crate::mocks::{MockLogger, builder};

#[test]
fn test_fallback_is_used_until_init() {
    let loader = builder(MapEnvironment::new())
        .fallback_logger(Arc::new(FallbackLogger::new("bootstrap")))
        .build();
    assert_eq!(loader.log().namespace(), "bootstrap");

    loader.init().unwrap();
    assert_eq!(loader.log().namespace(), "ilp-module");

    // second call is a no-op
    loader.init().unwrap();
    assert_eq!(loader.log().namespace(), "ilp-module");
}

#[test]
fn test_init_builds_configured_logger_module() {
    let loader = builder(MapEnvironment::new().with_var("ILP_LOGGER", "mock-logger")).build();
    loader.init().unwrap();
    assert!(loader.log().downcast_ref::<MockLogger>().is_some());
}

#[test]
fn test_failed_init_keeps_fallback() {
    let loader = builder(MapEnvironment::new().with_var("ILP_LOGGER", "missing-logger"))
        .fallback_logger(Arc::new(FallbackLogger::new("bootstrap")))
        .build();
    assert!(loader.init().is_err());
    assert_eq!(loader.log().namespace(), "bootstrap");
}
