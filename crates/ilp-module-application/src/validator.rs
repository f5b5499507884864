//! Post-construction contract check

use std::sync::Arc;

use ilp_module_domain::{ModuleInstance, RoleType};

use crate::internal_log::InternalLog;
use crate::roles::KnownRole;

/// Checks a freshly built instance against its role's declared capabilities
pub struct Validator {
    log: Arc<InternalLog>,
}

impl Validator {
    pub fn new(log: Arc<InternalLog>) -> Self {
        Self { log }
    }

    /// Known roles must expose every required capability; custom roles always pass
    pub fn is_valid(&self, role: &RoleType, instance: &ModuleInstance) -> bool {
        match KnownRole::from_role(role) {
            Some(known) => known.is_valid_instance(instance),
            None => {
                self.log.get().warn(&format!(
                    "Couldn't validate instance of unknown module type '{role}'"
                ));
                true
            }
        }
    }
}
