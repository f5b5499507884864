//! Role types

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ENV_OPTIONS_SUFFIX, ENV_PREFIX, PACKAGE_PREFIX};

/// Name of a kind of pluggable capability
///
/// The four known roles have constants; any other string names a custom role
/// that gets no defaults and no structural validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleType(Cow<'static, str>);

impl RoleType {
    pub const LOGGER: Self = Self(Cow::Borrowed("logger"));
    pub const STORE: Self = Self(Cow::Borrowed("store"));
    pub const PLUGIN: Self = Self(Cow::Borrowed("plugin"));
    pub const BACKEND: Self = Self(Cow::Borrowed("backend"));

    /// Create a role type from any name
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The role name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Variable naming the module for this role (`ILP_STORE`)
    pub fn env_variable(&self) -> String {
        format!("{ENV_PREFIX}{}", self.0.to_uppercase())
    }

    /// Variable carrying JSON constructor options (`ILP_STORE_OPTIONS`)
    pub fn options_variable(&self) -> String {
        format!("{}{ENV_OPTIONS_SUFFIX}", self.env_variable())
    }

    /// Prefix of external packages implementing this role (`ilp-store-`)
    pub fn package_prefix(&self) -> String {
        format!("{PACKAGE_PREFIX}{}-", self.0)
    }

    /// Directory holding modules of this role (`stores`)
    pub fn directory(&self) -> String {
        format!("{}s", self.0)
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoleType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for RoleType {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for RoleType {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}
