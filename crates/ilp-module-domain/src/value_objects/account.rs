//! Account and asset descriptions consumed by backends

use serde::{Deserialize, Serialize};

/// Relationship between this node and the owner of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRelation {
    Parent,
    Peer,
    Child,
}

/// What a backend needs to know about an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub relation: AccountRelation,
    pub asset_code: String,
    pub asset_scale: i32,
}

impl AccountInfo {
    /// Asset held by this account
    pub fn asset(&self) -> AssetInfo {
        AssetInfo {
            code: self.asset_code.clone(),
            scale: self.asset_scale,
        }
    }
}

/// An asset identified by code (e.g. an ISO 4217 currency code) and scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub code: String,
    pub scale: i32,
}
