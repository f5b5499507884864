//! Module services tests

use std::sync::Arc;

use ilp_module_domain::value_objects::{AccountInfo, AccountRelation};
use ilp_module_domain::{Logger, ModuleServices};

struct QuietLogger;

impl Logger for QuietLogger {
    fn namespace(&self) -> &str {
        "quiet"
    }
    fn info(&self, _: &str) {}
    fn warn(&self, _: &str) {}
    fn error(&self, _: &str) {}
    fn debug(&self, _: &str) {}
    fn trace(&self, _: &str) {}
}

#[test]
fn test_services_hold_account_lookup() {
    let services = ModuleServices::new(Arc::new(QuietLogger)).with_account_info(|id| {
        (id == "alice").then(|| AccountInfo {
            relation: AccountRelation::Child,
            asset_code: "USD".to_string(),
            asset_scale: 2,
        })
    });

    let lookup = services.get_info.clone().expect("lookup was added");
    assert_eq!(lookup("alice").map(|info| info.asset().scale), Some(2));
    assert!(lookup("bob").is_none());
    assert!(services.store.is_none());
}

#[test]
fn test_extra_services_are_typed() {
    let services = ModuleServices::new(Arc::new(QuietLogger)).with_service("ledger", 7_u64);

    assert_eq!(services.service::<u64>("ledger").as_deref(), Some(&7));
    assert!(services.service::<String>("ledger").is_none());
    assert!(services.service::<u64>("missing").is_none());
}

#[test]
fn test_account_info_json_shape() {
    let info: AccountInfo = serde_json::from_str(
        r#"{"relation":"parent","assetCode":"XRP","assetScale":9}"#,
    )
    .unwrap();
    assert_eq!(info.relation, AccountRelation::Parent);
    assert_eq!(info.asset().code, "XRP");
}
