//! Module name and options resolution
//!
//! Name and options are ranked independently:
//!
//! | Rank | Name | Options |
//! |------|------|---------|
//! | 1 | explicit argument | explicit argument |
//! | 2 | `ILP_<ROLE>` | `ILP_<ROLE>_OPTIONS` (JSON object) |
//! | 3 | role default | role default |
//! | 4 | error | empty options |
//!
//! A name taken from the environment can therefore be paired with the role's
//! default options when no options are configured.

use std::sync::Arc;

use ilp_module_domain::{Environment, Error, ModuleOptions, Result, RoleType};

use crate::internal_log::InternalLog;
use crate::registry::ModuleRegistry;
use crate::roles::KnownRole;

/// Computes the `(name, options)` pair for a role type
pub struct Resolver {
    registry: Arc<ModuleRegistry>,
    env: Arc<dyn Environment>,
    log: Arc<InternalLog>,
}

impl Resolver {
    pub fn new(
        registry: Arc<ModuleRegistry>,
        env: Arc<dyn Environment>,
        log: Arc<InternalLog>,
    ) -> Self {
        Self { registry, env, log }
    }

    /// Default name and options for a known role type
    pub fn from_defaults(&self, role: &RoleType) -> (Option<String>, Option<ModuleOptions>) {
        match KnownRole::from_role(role) {
            Some(known) => {
                let (name, options) = known.load_defaults(&self.registry);
                (Some(name), Some(options))
            }
            None => {
                self.log
                    .get()
                    .debug(&format!("No default module for type '{role}'"));
                (None, None)
            }
        }
    }

    /// Name and options configured through `ILP_<ROLE>` and `ILP_<ROLE>_OPTIONS`
    ///
    /// `null` options count as unset. Options that are neither `null` nor a
    /// JSON object fail the whole resolution.
    pub fn from_environment(
        &self,
        role: &RoleType,
    ) -> Result<(Option<String>, Option<ModuleOptions>)> {
        let log = self.log.get();

        let name_variable = role.env_variable();
        let name = self.env.non_empty_var(&name_variable);
        if let Some(name) = &name {
            log.debug(&format!("Got {role} name from env. {name_variable}={name}"));
        }

        let options_variable = role.options_variable();
        let options = match self.env.non_empty_var(&options_variable) {
            Some(raw) => {
                log.debug(&format!(
                    "Got {role} options from env variable {options_variable}"
                ));
                ModuleOptions::from_json_or_null(&raw)
                    .map_err(|e| Error::malformed_environment_options(&options_variable, e))?
            }
            None => None,
        };

        Ok((name, options))
    }

    /// Resolve the module name and constructor options for `role`
    ///
    /// An empty explicit name counts as absent.
    pub fn resolve_name_and_options(
        &self,
        role: &RoleType,
        name: Option<&str>,
        options: Option<ModuleOptions>,
    ) -> Result<(String, ModuleOptions)> {
        let (default_name, default_options) = self.from_defaults(role);
        let (env_name, env_options) = self.from_environment(role)?;

        let module_name = name
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or(env_name)
            .or(default_name)
            .ok_or_else(|| Error::unknown_role(role.as_str()))?;

        let module_options = options
            .or(env_options)
            .or(default_options)
            .unwrap_or_default();

        Ok((module_name, module_options))
    }
}
