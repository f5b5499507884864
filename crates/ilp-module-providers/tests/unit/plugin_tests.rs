//! Tests for the mirror plugin

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use ilp_module_domain::ports::{PluginConnectOptions, PluginEvent};
use ilp_module_domain::{Error, Plugin};
use ilp_module_providers::plugins::MirrorPlugin;

use crate::common::{loader, test_logger};

fn mirror() -> MirrorPlugin {
    MirrorPlugin::new(test_logger())
}

#[tokio::test]
async fn test_mirrors_data() {
    let plugin = mirror();
    plugin
        .register_data_handler(Arc::new(|data: Vec<u8>| {
            async move {
                assert_eq!(data, b"Hello".to_vec());
                Ok(b"World".to_vec())
            }
            .boxed()
        }))
        .unwrap();

    let response = plugin.send_data(b"Hello".to_vec()).await.unwrap();
    assert_eq!(response, b"World".to_vec());
}

#[tokio::test]
async fn test_mirrors_money() {
    let plugin = mirror();
    let received = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&received);
    plugin
        .register_money_handler(Arc::new(move |amount: String| {
            let counter = Arc::clone(&counter);
            async move {
                assert_eq!(amount, "10");
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            .boxed()
        }))
        .unwrap();

    plugin.send_money("10").await.unwrap();
    assert_eq!(received.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_send_without_handlers_fails() {
    let plugin = mirror();
    assert!(matches!(
        plugin.send_data(Vec::new()).await,
        Err(Error::Plugin { .. })
    ));
    assert!(matches!(
        plugin.send_money("10").await,
        Err(Error::Plugin { .. })
    ));
}

#[tokio::test]
async fn test_second_data_handler_is_rejected() {
    let plugin = mirror();
    let handler: ilp_module_domain::ports::DataHandler =
        Arc::new(|data: Vec<u8>| async move { Ok(data) }.boxed());

    plugin.register_data_handler(Arc::clone(&handler)).unwrap();
    assert!(plugin.register_data_handler(Arc::clone(&handler)).is_err());

    plugin.deregister_data_handler();
    assert!(plugin.register_data_handler(handler).is_ok());
}

#[tokio::test]
async fn test_connect_and_disconnect_emit_events() {
    let plugin = mirror();
    let mut events = plugin.subscribe();

    assert!(!plugin.is_connected());
    plugin.connect(PluginConnectOptions::default()).await.unwrap();
    assert!(plugin.is_connected());
    plugin.disconnect().await.unwrap();
    assert!(!plugin.is_connected());

    assert_eq!(events.recv().await.unwrap(), PluginEvent::Connect);
    assert_eq!(events.recv().await.unwrap(), PluginEvent::Disconnect);
}

#[tokio::test]
async fn test_admin_info_is_unsupported() {
    let plugin = mirror();
    assert!(plugin.get_admin_info().await.is_err());
}

#[tokio::test]
async fn test_create_mirror_by_name() {
    let plugin = loader()
        .create_plugin(Some("mirror"), None, None)
        .expect("mirror plugin is built in");
    assert!(!plugin.is_connected());
    assert!(plugin.downcast_arc::<MirrorPlugin>().is_ok());
    assert_eq!(MirrorPlugin::VERSION, 2);
}
