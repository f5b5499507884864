//! Module Registry System
//!
//! Replaces runtime discovery of modules by string name with an explicit
//! table of factories. Entries come from two `linkme` distributed slices and
//! from registrations made by the embedding application at startup.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Module Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Built-in:  #[linkme::distributed_slice(BUILTIN_MODULES)]    │
//! │                static ENTRY: ModuleEntry = ...                  │
//! │                   → mounted at <framework dir>/<role>s/<name>   │
//! │                                                                 │
//! │  2. Package:   #[linkme::distributed_slice(PACKAGE_MODULES)]    │
//! │                   → keyed by "ilp-<role>-<name>"                │
//! │                                                                 │
//! │  3. App:       registry.mount(root, entry)                      │
//! │                   → mounted at <root>/<role>s/<name>            │
//! │                              ↓                                  │
//! │  4. Locator strategies query the registry in order              │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a built-in (in ilp-module-providers)
//!
//! ```ignore
//! use ilp_module_application::registry::{BUILTIN_MODULES, ModuleEntry, ModuleExport};
//!
//! #[linkme::distributed_slice(BUILTIN_MODULES)]
//! static IN_MEMORY_STORE: ModuleEntry = ModuleEntry {
//!     role: "store",
//!     name: "in-memory",
//!     description: "In-memory key/value store",
//!     export: ModuleExport::default_export(in_memory_store_factory),
//! };
//! ```

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use ilp_module_domain::{ModuleInstance, ModuleOptions, ModuleServices, Result, RoleType};
use serde::Serialize;

/// Constructor of a module: receives the resolved options and the services
///
/// `services` is `None` only when a logger is built without caller-supplied
/// services.
pub type ModuleFactory = fn(ModuleOptions, Option<ModuleServices>) -> Result<ModuleInstance>;

/// Constructors exposed by a module
///
/// The `default` export is preferred; `constructor` is the fallback. A module
/// with neither cannot be instantiated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleExport {
    pub default: Option<ModuleFactory>,
    pub constructor: Option<ModuleFactory>,
}

impl ModuleExport {
    /// Module whose `default` export is the constructor
    pub const fn default_export(factory: ModuleFactory) -> Self {
        Self {
            default: Some(factory),
            constructor: None,
        }
    }

    /// Module whose top-level export is the constructor
    pub const fn constructor(factory: ModuleFactory) -> Self {
        Self {
            default: None,
            constructor: Some(factory),
        }
    }

    /// Module exporting no constructor at all
    pub const fn none() -> Self {
        Self {
            default: None,
            constructor: None,
        }
    }

    /// The constructor to use, preferring the `default` export
    pub fn factory(&self) -> Option<ModuleFactory> {
        self.default.or(self.constructor)
    }
}

/// Registry entry for a module implementation
#[derive(Debug, Clone, Copy)]
pub struct ModuleEntry {
    /// Role type the module implements (e.g. "store")
    pub role: &'static str,
    /// Module name; for packages the full `ilp-<role>-<name>` name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Exported constructors
    pub export: ModuleExport,
}

// Auto-collection via linkme distributed slices - modules submit entries at compile time
#[linkme::distributed_slice]
pub static BUILTIN_MODULES: [ModuleEntry] = [..];

#[linkme::distributed_slice]
pub static PACKAGE_MODULES: [ModuleEntry] = [..];

/// Path a module of `role` named `name` occupies under `root`
pub fn module_path(root: &Path, role: &RoleType, name: &str) -> PathBuf {
    normalize_path(&root.join(role.directory()).join(name))
}

/// Drop `.` components and fold each `..` into its parent, without touching the filesystem
///
/// `..` directly under the root stays at the root; leading `..` of a relative
/// path are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// One registered module, as shown by listings
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ModuleListing {
    pub role: String,
    pub name: String,
    pub description: String,
    pub location: String,
}

/// Table of every module the locator can find
///
/// Packages are keyed by their full name, everything else by path.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    packages: HashMap<String, ModuleEntry>,
    modules: HashMap<PathBuf, ModuleEntry>,
}

impl ModuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every linked package and the built-ins mounted at `framework_dir`
    pub fn with_linked_modules(framework_dir: &Path) -> Self {
        let mut registry = Self::new();
        for entry in PACKAGE_MODULES {
            registry.register_package(*entry);
        }
        for entry in BUILTIN_MODULES {
            registry.mount(framework_dir, *entry);
        }
        registry
    }

    /// Register an external package under its full name
    pub fn register_package(&mut self, entry: ModuleEntry) -> Option<ModuleEntry> {
        self.packages.insert(entry.name.to_string(), entry)
    }

    /// Register a module at an explicit path
    pub fn register_path(&mut self, path: impl Into<PathBuf>, entry: ModuleEntry) -> Option<ModuleEntry> {
        self.modules.insert(normalize_path(&path.into()), entry)
    }

    /// Register a module at `<root>/<role>s/<name>`, returning that path
    pub fn mount(&mut self, root: &Path, entry: ModuleEntry) -> PathBuf {
        let path = module_path(root, &RoleType::from(entry.role), entry.name);
        self.modules.insert(path.clone(), entry);
        path
    }

    /// Package registered under `name`
    pub fn package(&self, name: &str) -> Option<&ModuleEntry> {
        self.packages.get(name)
    }

    /// Whether a package named `name` is linked
    pub fn package_exists(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Module registered at `path`
    pub fn at_path(&self, path: &Path) -> Option<&ModuleEntry> {
        self.modules.get(&normalize_path(path))
    }

    /// Whether a module is registered at `path`
    pub fn exists_at(&self, path: &Path) -> bool {
        self.modules.contains_key(&normalize_path(path))
    }

    /// All registered modules, sorted by role then name
    pub fn list(&self) -> Vec<ModuleListing> {
        let packages = self.packages.iter().map(|(name, entry)| ModuleListing {
            role: entry.role.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            location: name.clone(),
        });
        let modules = self.modules.iter().map(|(path, entry)| ModuleListing {
            role: entry.role.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            location: path.display().to_string(),
        });
        let mut listings: Vec<ModuleListing> = packages.chain(modules).collect();
        listings.sort();
        listings
    }
}
