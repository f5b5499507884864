//! Module loader
//!
//! [`ModuleLoader`] wires the resolver, the locator and the validator
//! together and owns the framework's internal logger.
//!
//! ## Usage
//!
//! ```ignore
//! let loader = ModuleLoader::builder(Arc::new(ProcessEnvironment))
//!     .module_root("/srv/connector")
//!     .build();
//! loader.init()?;
//!
//! let store = loader.create_store(None, None, None)?;
//! store.put("k", "v").await?;
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use ilp_module_domain::constants::INTERNAL_LOG_NAMESPACE;
use ilp_module_domain::{
    Backend, Environment, Error, Logger, ModuleInstance, ModuleOptions, ModuleServices, Plugin,
    Result, RoleType, Store,
};

use crate::internal_log::{FallbackLogger, InternalLog};
use crate::locator::{ApplicationLocator, BuiltinLocator, Locator, PackageLocator};
use crate::registry::{ModuleEntry, ModuleFactory, ModuleRegistry};
use crate::resolver::Resolver;
use crate::validator::Validator;

/// Directory the built-in modules are mounted under unless configured otherwise
pub const DEFAULT_FRAMEWORK_DIR: &str = env!("CARGO_MANIFEST_DIR");

enum Registration {
    Package(ModuleEntry),
    Mount(PathBuf, ModuleEntry),
    Path(PathBuf, ModuleEntry),
}

/// Builder for [`ModuleLoader`]
pub struct ModuleLoaderBuilder {
    env: Arc<dyn Environment>,
    registry: Option<ModuleRegistry>,
    registrations: Vec<Registration>,
    module_root: Option<PathBuf>,
    framework_dir: PathBuf,
    fallback: Option<Arc<dyn Logger>>,
}

impl ModuleLoaderBuilder {
    fn new(env: Arc<dyn Environment>) -> Self {
        Self {
            env,
            registry: None,
            registrations: Vec::new(),
            module_root: None,
            framework_dir: PathBuf::from(DEFAULT_FRAMEWORK_DIR),
            fallback: None,
        }
    }

    /// Use `registry` instead of the linked packages and built-ins
    pub fn registry(mut self, registry: ModuleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Module root used when `ILP_MODULE_ROOT` is not set
    pub fn module_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.module_root = Some(root.into());
        self
    }

    /// Directory the built-ins are mounted under
    pub fn framework_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.framework_dir = dir.into();
        self
    }

    /// Logger used for diagnostics until [`ModuleLoader::init`] runs
    pub fn fallback_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.fallback = Some(logger);
        self
    }

    /// Register an external package
    pub fn package(mut self, entry: ModuleEntry) -> Self {
        self.registrations.push(Registration::Package(entry));
        self
    }

    /// Register an application module at `<root>/<role>s/<name>`
    pub fn mount(mut self, root: impl Into<PathBuf>, entry: ModuleEntry) -> Self {
        self.registrations
            .push(Registration::Mount(root.into(), entry));
        self
    }

    /// Register a module at an explicit path
    pub fn path(mut self, path: impl Into<PathBuf>, entry: ModuleEntry) -> Self {
        self.registrations.push(Registration::Path(path.into(), entry));
        self
    }

    pub fn build(self) -> ModuleLoader {
        let mut registry = self
            .registry
            .unwrap_or_else(|| ModuleRegistry::with_linked_modules(&self.framework_dir));
        for registration in self.registrations {
            match registration {
                Registration::Package(entry) => {
                    registry.register_package(entry);
                }
                Registration::Mount(root, entry) => {
                    registry.mount(&root, entry);
                }
                Registration::Path(path, entry) => {
                    registry.register_path(path, entry);
                }
            }
        }

        let registry = Arc::new(registry);
        let fallback = self
            .fallback
            .unwrap_or_else(|| Arc::new(FallbackLogger::new(INTERNAL_LOG_NAMESPACE)));
        let log = Arc::new(InternalLog::new(fallback));

        let application = ApplicationLocator::new(Arc::clone(&self.env), self.module_root);
        let module_root = application.clone();
        let locator = Locator::new(Arc::clone(&registry), Arc::clone(&log))
            .with_strategy(PackageLocator)
            .with_strategy(application)
            .with_strategy(BuiltinLocator::new(self.framework_dir));

        ModuleLoader {
            resolver: Resolver::new(Arc::clone(&registry), Arc::clone(&self.env), Arc::clone(&log)),
            locator,
            validator: Validator::new(Arc::clone(&log)),
            module_root,
            registry,
            log,
        }
    }
}

/// Resolves, locates, constructs and validates modules
pub struct ModuleLoader {
    resolver: Resolver,
    locator: Locator,
    validator: Validator,
    module_root: ApplicationLocator,
    registry: Arc<ModuleRegistry>,
    log: Arc<InternalLog>,
}

impl ModuleLoader {
    /// Start building a loader reading configuration from `env`
    pub fn builder(env: Arc<dyn Environment>) -> ModuleLoaderBuilder {
        ModuleLoaderBuilder::new(env)
    }

    /// Build the internal logger through the pipeline and install it
    ///
    /// Diagnostics emitted while it is being built go to the fallback logger.
    /// Calling this again after a successful call does nothing.
    pub fn init(&self) -> Result<()> {
        if self.log.is_installed() {
            return Ok(());
        }
        let logger = self.create_logger(INTERNAL_LOG_NAMESPACE)?;
        self.log.install(logger);
        Ok(())
    }

    /// The framework's internal logger
    pub fn log(&self) -> &dyn Logger {
        self.log.get()
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Directory holding application modules for the current environment
    pub fn get_module_root(&self) -> PathBuf {
        self.module_root.module_root()
    }

    /// Prefix of external packages for `role` (`ilp-<role>-`)
    pub fn get_module_prefix(role: &RoleType) -> String {
        role.package_prefix()
    }

    /// Name and options configured in the environment for `role`
    pub fn get_from_environment(
        &self,
        role: &RoleType,
    ) -> Result<(Option<String>, Option<ModuleOptions>)> {
        self.resolver.from_environment(role)
    }

    /// See [`Resolver::resolve_name_and_options`]
    pub fn resolve_name_and_options(
        &self,
        role: &RoleType,
        name: Option<&str>,
        options: Option<ModuleOptions>,
    ) -> Result<(String, ModuleOptions)> {
        self.resolver.resolve_name_and_options(role, name, options)
    }

    /// Constructor of the module for `role`, resolving the name when none is given
    pub fn load_module(&self, role: &RoleType, name: Option<&str>) -> Result<ModuleFactory> {
        let (module_name, _) = self.resolver.resolve_name_and_options(role, name, None)?;
        let (_, factory) = self.locator.load(role, &module_name)?;
        Ok(factory)
    }

    /// Whether `instance` satisfies the contract of `role`
    pub fn validate_instance(&self, role: &RoleType, instance: &ModuleInstance) -> bool {
        self.validator.is_valid(role, instance)
    }

    /// Create and validate a module instance
    ///
    /// When `services` is `None` a logger namespaced after the module is
    /// created and injected, except when the module is itself a logger.
    /// Errors raised by the module's constructor are returned unchanged.
    pub fn create_module(
        &self,
        role: &RoleType,
        name: Option<&str>,
        options: Option<ModuleOptions>,
        services: Option<ModuleServices>,
    ) -> Result<ModuleInstance> {
        self.build_module(role, name, options, services)
            .map(|(_, instance)| instance)
    }

    /// Resolved module name plus the validated instance
    fn build_module(
        &self,
        role: &RoleType,
        name: Option<&str>,
        options: Option<ModuleOptions>,
        services: Option<ModuleServices>,
    ) -> Result<(String, ModuleInstance)> {
        let (module_name, constructor_options) =
            self.resolver.resolve_name_and_options(role, name, options)?;
        let (_, factory) = self.locator.load(role, &module_name)?;

        let services = match services {
            Some(services) => Some(services),
            None if *role != RoleType::LOGGER => {
                let namespace = module_namespace(role, &module_name);
                Some(ModuleServices::new(self.create_logger(&namespace)?))
            }
            None => None,
        };

        let instance = factory(constructor_options, services)?;
        if self.validator.is_valid(role, &instance) {
            Ok((module_name, instance))
        } else {
            Err(Error::invalid_module(module_name, role.as_str()))
        }
    }

    /// Logger with the given namespace, using the configured or default logger module
    pub fn create_logger(&self, namespace: &str) -> Result<Arc<dyn Logger>> {
        let options = ModuleOptions::new().with("namespace", namespace);
        self.create_typed(
            &RoleType::LOGGER,
            None,
            Some(options),
            None,
            ModuleInstance::into_logger,
        )
    }

    /// Logger from a named module
    pub fn create_custom_logger(
        &self,
        name: &str,
        options: Option<ModuleOptions>,
        services: Option<ModuleServices>,
    ) -> Result<Arc<dyn Logger>> {
        self.create_typed(
            &RoleType::LOGGER,
            Some(name),
            options,
            services,
            ModuleInstance::into_logger,
        )
    }

    pub fn create_store(
        &self,
        name: Option<&str>,
        options: Option<ModuleOptions>,
        services: Option<ModuleServices>,
    ) -> Result<Arc<dyn Store>> {
        self.create_typed(
            &RoleType::STORE,
            name,
            options,
            services,
            ModuleInstance::into_store,
        )
    }

    pub fn create_plugin(
        &self,
        name: Option<&str>,
        options: Option<ModuleOptions>,
        services: Option<ModuleServices>,
    ) -> Result<Arc<dyn Plugin>> {
        self.create_typed(
            &RoleType::PLUGIN,
            name,
            options,
            services,
            ModuleInstance::into_plugin,
        )
    }

    pub fn create_backend(
        &self,
        name: Option<&str>,
        options: Option<ModuleOptions>,
        services: Option<ModuleServices>,
    ) -> Result<Arc<dyn Backend>> {
        self.create_typed(
            &RoleType::BACKEND,
            name,
            options,
            services,
            ModuleInstance::into_backend,
        )
    }

    fn create_typed<T>(
        &self,
        role: &RoleType,
        name: Option<&str>,
        options: Option<ModuleOptions>,
        services: Option<ModuleServices>,
        extract: fn(ModuleInstance) -> Option<T>,
    ) -> Result<T> {
        let (module_name, instance) = self.build_module(role, name, options, services)?;
        into_typed(&module_name, role, instance, extract)
    }
}

impl std::fmt::Debug for ModuleLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleLoader")
            .field("module_root", &self.get_module_root())
            .field("modules", &self.registry.list().len())
            .field("log", &self.log)
            .finish()
    }
}

/// The role trait object held by `instance`, or `InvalidModule` naming `module_name`
fn into_typed<T>(
    module_name: &str,
    role: &RoleType,
    instance: ModuleInstance,
    extract: fn(ModuleInstance) -> Option<T>,
) -> Result<T> {
    extract(instance).ok_or_else(|| Error::invalid_module(module_name, role.as_str()))
}

/// Namespace of the logger injected into a module
fn module_namespace(role: &RoleType, module_name: &str) -> String {
    if module_name.starts_with(&role.package_prefix()) {
        module_name.to_string()
    } else {
        format!("internal-{role}-{module_name}")
    }
}
