//! Capability reporting of module instances

use async_trait::async_trait;
use ilp_module_domain::value_objects::Capability;
use ilp_module_domain::ports::{RateEndpoint, SubmitPaymentParams};
use ilp_module_domain::{Backend, Error, Logger, ModuleInstance, Result, Store};

struct NamedLogger(&'static str);

impl Logger for NamedLogger {
    fn namespace(&self) -> &str {
        self.0
    }
    fn info(&self, _: &str) {}
    fn warn(&self, _: &str) {}
    fn error(&self, _: &str) {}
    fn debug(&self, _: &str) {}
    fn trace(&self, _: &str) {}
}

struct NullStore;

#[async_trait]
impl Store for NullStore {
    async fn get(&self, _: &str) -> Result<Option<String>> {
        Ok(None)
    }
    async fn put(&self, _: &str, _: &str) -> Result<()> {
        Ok(())
    }
    async fn delete(&self, _: &str) -> Result<()> {
        Ok(())
    }
}

struct FlatBackend;

#[async_trait]
impl Backend for FlatBackend {
    async fn connect(&self) -> Result<()> {
        Ok(())
    }
    async fn get_rate(&self, _: RateEndpoint, _: RateEndpoint) -> Result<f64> {
        Ok(1.0)
    }
    async fn submit_payment(&self, _: SubmitPaymentParams) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_logger_with_namespace_has_all_logger_capabilities() {
    let caps = ModuleInstance::logger(NamedLogger("ilp")).capabilities();
    assert!(caps.contains(&Capability::Namespace));
    for writer in Capability::LOGGER_WRITERS {
        assert!(caps.contains(writer));
    }
}

#[test]
fn test_logger_without_namespace_lacks_namespace_capability() {
    let caps = ModuleInstance::logger(NamedLogger("")).capabilities();
    assert!(!caps.contains(&Capability::Namespace));
    assert!(caps.contains(&Capability::Info));
}

#[test]
fn test_store_capabilities() {
    let instance = ModuleInstance::store(NullStore);
    assert_eq!(instance.kind(), "store");
    assert_eq!(instance.capabilities().len(), Capability::STORE.len());
}

#[test]
fn test_custom_instances_report_nothing() {
    let instance = ModuleInstance::custom(42_u32);
    assert!(instance.capabilities().is_empty());
    assert_eq!(instance.clone().downcast_custom::<u32>().as_deref(), Some(&42));
    assert!(instance.downcast_custom::<String>().is_none());
}

#[test]
fn test_into_wrong_role_is_none() {
    let instance = ModuleInstance::store(NullStore);
    assert!(instance.clone().into_logger().is_none());
    assert!(instance.into_store().is_some());
}

#[test]
fn test_role_trait_objects_are_debug() {
    let store = ModuleInstance::store(NullStore).into_store().unwrap();
    assert_eq!(format!("{store:?}"), "Store { .. }");

    let backend = ModuleInstance::backend(FlatBackend).into_backend().unwrap();
    assert_eq!(format!("{backend:?}"), "Backend { .. }");

    let failed: Result<std::sync::Arc<dyn Backend>> = Err(Error::backend("unreachable"));
    let err = failed.expect_err("backend results can be unwrapped in tests");
    assert!(err.to_string().contains("unreachable"));
}
