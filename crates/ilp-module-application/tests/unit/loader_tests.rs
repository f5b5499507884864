//! Module construction per role

use ilp_module_domain::value_objects::{AccountInfo, AccountRelation};
use ilp_module_domain::{Error, MapEnvironment, ModuleOptions, ModuleServices, RoleType};

use crate::mocks::{
    MockBackend, MockLogger, MockPlugin, MockStore, MockWidget, PACKAGE_WIDGET, builder, loader,
};

fn widget() -> RoleType {
    RoleType::from("widget")
}

fn account_services(loader: &ilp_module_application::ModuleLoader) -> ModuleServices {
    ModuleServices::new(loader.create_logger("test").unwrap()).with_account_info(|_| {
        Some(AccountInfo {
            relation: AccountRelation::Peer,
            asset_code: "USD".to_string(),
            asset_scale: 2,
        })
    })
}

#[test]
fn test_store_explicit_options_beat_env_options() {
    let env = MapEnvironment::new()
        .with_var("ILP_STORE", "mock-store")
        .with_var("ILP_STORE_OPTIONS", r#"{"prefix":"ENV"}"#);
    let store = loader(env)
        .create_store(None, Some(ModuleOptions::new().with("prefix", "TEST")), None)
        .unwrap();
    let store = store.downcast_arc::<MockStore>().ok().unwrap();
    assert_eq!(store.prefix.as_deref(), Some("TEST"));
}

#[test]
fn test_store_env_options_are_used() {
    let env = MapEnvironment::new()
        .with_var("ILP_STORE", "mock-store")
        .with_var("ILP_STORE_OPTIONS", r#"{"prefix":"ENV"}"#);
    let store = loader(env).create_store(None, None, None).unwrap();
    let store = store.downcast_arc::<MockStore>().ok().unwrap();
    assert_eq!(store.prefix.as_deref(), Some("ENV"));
}

#[test]
fn test_store_receives_namespaced_logger() {
    let store = loader(MapEnvironment::new())
        .create_store(Some("mock-store"), None, None)
        .unwrap();
    let store = store.downcast_arc::<MockStore>().ok().unwrap();
    assert_eq!(store.log_namespace.as_deref(), Some("internal-store-mock-store"));
    assert_eq!(store.prefix.as_deref(), Some("ilp:"));
}

#[test]
fn test_package_module_logger_uses_package_name() {
    let instance = builder(MapEnvironment::new())
        .package(PACKAGE_WIDGET)
        .build()
        .create_module(&widget(), Some("ilp-widget-fancy"), None, None)
        .unwrap();
    let widget = instance.downcast_custom::<MockWidget>().unwrap();
    assert_eq!(widget.log_namespace.as_deref(), Some("ilp-widget-fancy"));
}

#[test]
fn test_logger_gets_no_default_services() {
    let logger = loader(MapEnvironment::new())
        .create_custom_logger(
            "mock-logger",
            Some(ModuleOptions::new().with("namespace", "mock")),
            None,
        )
        .unwrap();
    let logger = logger.downcast_arc::<MockLogger>().ok().unwrap();
    assert_eq!(logger.namespace, "mock");
    assert!(!logger.had_services);
}

#[test]
fn test_create_logger_honours_env_module() {
    let env = MapEnvironment::new().with_var("ILP_LOGGER", "mock-logger");
    let logger = loader(env).create_logger("from-env").unwrap();
    assert_eq!(logger.namespace(), "from-env");
    assert!(logger.downcast_arc::<MockLogger>().is_ok());
}

#[test]
fn test_backend_options_and_services() {
    let loader = loader(MapEnvironment::new());
    let backend = loader
        .create_backend(
            Some("mock-backend"),
            Some(ModuleOptions::new().with("spread", 1)),
            Some(account_services(&loader)),
        )
        .unwrap();
    let backend = backend.downcast_arc::<MockBackend>().ok().unwrap();
    assert_eq!(backend.spread, Some(1.0));
    assert!(backend.has_account_info);
}

#[test]
fn test_backend_env_name_and_explicit_options() {
    let env = MapEnvironment::new()
        .with_var("ILP_BACKEND", "mock-backend")
        .with_var("ILP_BACKEND_OPTIONS", r#"{"spread":-1}"#);
    let backend = loader(env)
        .create_backend(None, Some(ModuleOptions::new().with("spread", 1)), None)
        .unwrap();
    let backend = backend.downcast_arc::<MockBackend>().ok().unwrap();
    assert_eq!(backend.spread, Some(1.0));
    assert!(!backend.has_account_info);
}

#[tokio::test]
async fn test_default_backend_trades_by_scale() {
    let loader = loader(MapEnvironment::new());
    let services = ModuleServices::new(loader.create_logger("test").unwrap()).with_account_info(
        |id| {
            let scale = match id {
                "test.cad-ledger.mark" => 2,
                "test.usd-ledger.mary" => 4,
                _ => return None,
            };
            Some(AccountInfo {
                relation: AccountRelation::Peer,
                asset_code: "USD".to_string(),
                asset_scale: scale,
            })
        },
    );
    let backend = loader.create_backend(None, None, Some(services)).unwrap();
    let rate = backend
        .get_rate("test.cad-ledger.mark".into(), "test.usd-ledger.mary".into())
        .await
        .unwrap();
    assert_eq!(rate, 100.0);
}

#[test]
fn test_constructor_errors_are_propagated() {
    let err = loader(MapEnvironment::new())
        .create_backend(Some("one-to-one"), None, None)
        .expect_err("default services lack account info");
    assert!(matches!(err, Error::MissingService { .. }));
}

#[test]
fn test_plugin_by_name_with_options() {
    let plugin = loader(MapEnvironment::new())
        .create_plugin(
            Some("mock-plugin"),
            Some(ModuleOptions::new().with("server", "btp+ws://localhost")),
            None,
        )
        .unwrap();
    let plugin = plugin.downcast_arc::<MockPlugin>().ok().unwrap();
    assert_eq!(plugin.options.get_str("server"), Some("btp+ws://localhost"));
}

#[test]
fn test_default_plugin_is_mirror() {
    let plugin = loader(MapEnvironment::new())
        .create_plugin(None, None, None)
        .unwrap();
    assert!(!plugin.is_connected());
}

#[test]
fn test_widget_by_env_name_with_options() {
    let env = MapEnvironment::new()
        .with_var("ILP_WIDGET", "custom-module")
        .with_var("ILP_WIDGET_OPTIONS", r#"{"customOption":true}"#);
    let instance = loader(env)
        .create_module(&widget(), Some("mock-widget"), None, None)
        .unwrap();
    let widget = instance.downcast_custom::<MockWidget>().unwrap();
    assert_eq!(widget.options.get("customOption"), Some(&serde_json::json!(true)));
    assert_eq!(widget.log_namespace.as_deref(), Some("internal-widget-mock-widget"));
}

#[test]
fn test_widget_without_name_is_unknown() {
    let err = loader(MapEnvironment::new())
        .create_module(&widget(), None, None, None)
        .expect_err("widget has no default");
    assert!(matches!(err, Error::UnknownRole { .. }));
}

#[test]
fn test_explicit_services_are_passed_through() {
    let loader = loader(MapEnvironment::new());
    let services = ModuleServices::new(loader.create_logger("caller").unwrap());
    let instance = loader
        .create_module(&widget(), Some("mock-widget"), None, Some(services))
        .unwrap();
    let widget = instance.downcast_custom::<MockWidget>().unwrap();
    assert_eq!(widget.log_namespace.as_deref(), Some("caller"));
}
