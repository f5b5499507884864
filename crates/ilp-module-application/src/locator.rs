//! Module location
//!
//! A resolved name is turned into a registered module by asking an ordered
//! list of [`ModuleLocator`] strategies; the first hit wins. The standard
//! order is:
//!
//! 1. [`PackageLocator`]: names starting with `ilp-<role>-` that are linked packages
//! 2. [`ApplicationLocator`]: `<module root>/<role>s/<name>`
//! 3. [`BuiltinLocator`]: `<framework dir>/<role>s/<name>`

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use ilp_module_domain::constants::MODULE_ROOT_ENV;
use ilp_module_domain::{Environment, Error, Result, RoleType};

use crate::internal_log::InternalLog;
use crate::registry::{ModuleEntry, ModuleFactory, ModuleRegistry, module_path, normalize_path};

/// Where a module was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleReference {
    /// Linked package, by full name
    Package(String),
    /// Application extension, by path under the module root
    Application(PathBuf),
    /// Framework built-in, by path under the framework directory
    Builtin(PathBuf),
}

impl fmt::Display for ModuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package(name) => f.write_str(name),
            Self::Application(path) | Self::Builtin(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A module found by a strategy
#[derive(Debug, Clone)]
pub struct LocatedModule {
    pub reference: ModuleReference,
    pub entry: ModuleEntry,
}

impl LocatedModule {
    /// Exported constructor, preferring the `default` export
    pub fn constructor(&self, role: &RoleType) -> Result<ModuleFactory> {
        self.entry
            .export
            .factory()
            .ok_or_else(|| Error::invalid_export(role.as_str(), self.reference.to_string()))
    }
}

/// One lookup strategy
pub trait ModuleLocator: Send + Sync {
    /// Short label used in diagnostics
    fn strategy(&self) -> &'static str;

    /// Path this strategy would probe, reported when nothing is found
    fn search_path(&self, _role: &RoleType, _name: &str) -> Option<PathBuf> {
        None
    }

    /// Find `name` for `role` in `registry`
    fn locate(
        &self,
        registry: &ModuleRegistry,
        role: &RoleType,
        name: &str,
    ) -> Option<LocatedModule>;
}

/// Linked packages following the `ilp-<role>-<name>` convention
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageLocator;

impl ModuleLocator for PackageLocator {
    fn strategy(&self) -> &'static str {
        "package"
    }

    fn locate(
        &self,
        registry: &ModuleRegistry,
        role: &RoleType,
        name: &str,
    ) -> Option<LocatedModule> {
        if !name.starts_with(&role.package_prefix()) {
            return None;
        }
        registry.package(name).map(|entry| LocatedModule {
            reference: ModuleReference::Package(name.to_string()),
            entry: *entry,
        })
    }
}

/// Extensions of the embedding application under its module root
///
/// The root is read on every lookup: `ILP_MODULE_ROOT`, then the configured
/// root, then the current directory. A relative root is taken from the
/// current directory.
#[derive(Clone)]
pub struct ApplicationLocator {
    env: Arc<dyn Environment>,
    default_root: Option<PathBuf>,
}

impl ApplicationLocator {
    pub fn new(env: Arc<dyn Environment>, default_root: Option<PathBuf>) -> Self {
        Self { env, default_root }
    }

    /// Directory holding the application's `<role>s/` directories
    pub fn module_root(&self) -> PathBuf {
        let current_dir = self.env.current_dir();
        let root = self
            .env
            .non_empty_var(MODULE_ROOT_ENV)
            .map(PathBuf::from)
            .or_else(|| self.default_root.clone())
            .or_else(|| current_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        match current_dir {
            Some(cwd) if root.is_relative() => normalize_path(&cwd.join(root)),
            _ => normalize_path(&root),
        }
    }
}

impl ModuleLocator for ApplicationLocator {
    fn strategy(&self) -> &'static str {
        "application"
    }

    fn search_path(&self, role: &RoleType, name: &str) -> Option<PathBuf> {
        Some(module_path(&self.module_root(), role, name))
    }

    fn locate(
        &self,
        registry: &ModuleRegistry,
        role: &RoleType,
        name: &str,
    ) -> Option<LocatedModule> {
        let path = module_path(&self.module_root(), role, name);
        registry.at_path(&path).map(|entry| LocatedModule {
            reference: ModuleReference::Application(path),
            entry: *entry,
        })
    }
}

/// Modules bundled with the framework
#[derive(Debug, Clone)]
pub struct BuiltinLocator {
    framework_dir: PathBuf,
}

impl BuiltinLocator {
    pub fn new(framework_dir: impl Into<PathBuf>) -> Self {
        Self {
            framework_dir: framework_dir.into(),
        }
    }
}

impl ModuleLocator for BuiltinLocator {
    fn strategy(&self) -> &'static str {
        "built-in"
    }

    fn search_path(&self, role: &RoleType, name: &str) -> Option<PathBuf> {
        Some(module_path(&self.framework_dir, role, name))
    }

    fn locate(
        &self,
        registry: &ModuleRegistry,
        role: &RoleType,
        name: &str,
    ) -> Option<LocatedModule> {
        let path = module_path(&self.framework_dir, role, name);
        registry.at_path(&path).map(|entry| LocatedModule {
            reference: ModuleReference::Builtin(path),
            entry: *entry,
        })
    }
}

/// Ordered list of strategies over one registry
pub struct Locator {
    registry: Arc<ModuleRegistry>,
    strategies: Vec<Box<dyn ModuleLocator>>,
    log: Arc<InternalLog>,
}

impl Locator {
    /// Locator with no strategies
    pub fn new(registry: Arc<ModuleRegistry>, log: Arc<InternalLog>) -> Self {
        Self {
            registry,
            strategies: Vec::new(),
            log,
        }
    }

    /// Append a strategy; strategies run in insertion order
    pub fn with_strategy(mut self, strategy: impl ModuleLocator + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Find the module for `role` named `name`
    pub fn locate(&self, role: &RoleType, name: &str) -> Result<LocatedModule> {
        for strategy in &self.strategies {
            if let Some(found) = strategy.locate(&self.registry, role, name) {
                self.log.get().debug(&format!(
                    "Loading {} module. type={role}, module={}",
                    strategy.strategy(),
                    found.reference
                ));
                return Ok(found);
            }
        }

        let tried = self
            .strategies
            .iter()
            .find_map(|strategy| strategy.search_path(role, name))
            .unwrap_or_default();
        Err(Error::module_not_found(role.as_str(), name, tried))
    }

    /// Find the module and extract its constructor
    pub fn load(&self, role: &RoleType, name: &str) -> Result<(ModuleReference, ModuleFactory)> {
        let located = self.locate(role, name)?;
        let factory = located.constructor(role)?;
        Ok((located.reference, factory))
    }
}
