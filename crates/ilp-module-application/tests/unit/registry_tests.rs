//! Linked module registration

use std::path::Path;

use ilp_module_application::{BUILTIN_MODULES, DEFAULT_FRAMEWORK_DIR, ModuleRegistry};
use ilp_module_domain::MapEnvironment;

use crate::mocks::loader;

#[test]
fn test_builtins_are_linked() {
    let names: Vec<(&str, &str)> = BUILTIN_MODULES
        .iter()
        .map(|entry| (entry.role, entry.name))
        .collect();
    for expected in [
        ("logger", "console"),
        ("logger", "debug"),
        ("store", "in-memory"),
        ("plugin", "mirror"),
        ("backend", "one-to-one"),
    ] {
        assert!(names.contains(&expected), "missing built-in {expected:?}");
    }
}

#[test]
fn test_builtins_are_mounted_under_framework_dir() {
    let registry = ModuleRegistry::with_linked_modules(Path::new(DEFAULT_FRAMEWORK_DIR));
    assert!(registry.exists_at(&Path::new(DEFAULT_FRAMEWORK_DIR).join("stores/in-memory")));
}

#[test]
fn test_listing_includes_mounted_mocks() {
    let listing = loader(MapEnvironment::new()).registry().list();
    assert!(listing.iter().any(|module| module.location == "/mocks/widgets/mock-widget"));
    assert!(listing.iter().any(|module| module.name == "mirror"));
}
