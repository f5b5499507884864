//! Logger contract and defaults

use ilp_module_domain::{Capability, ModuleOptions};

pub const REQUIRED: &[Capability] = &[
    Capability::Namespace,
    Capability::Info,
    Capability::Warn,
    Capability::Error,
    Capability::Debug,
    Capability::Trace,
];

/// `debug` (tracing-backed) when a subscriber is installed, `console` otherwise
pub fn load_defaults() -> (String, ModuleOptions) {
    let name = if subscriber_installed() {
        "debug"
    } else {
        "console"
    };
    (name.to_string(), ModuleOptions::new().with("namespace", "ilp"))
}

fn subscriber_installed() -> bool {
    tracing::dispatcher::get_default(|dispatch| {
        !dispatch.is::<tracing::subscriber::NoSubscriber>()
    })
}
