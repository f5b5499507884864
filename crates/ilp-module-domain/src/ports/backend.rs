//! Backend role contract

use async_trait::async_trait;
use downcast_rs::{DowncastSync, impl_downcast};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value_objects::AssetInfo;

/// One side of a rate query: an account id or an explicit asset
#[derive(Debug, Clone, PartialEq)]
pub enum RateEndpoint {
    /// Account id, looked up through the account-info service
    Account(String),
    /// Asset described inline
    Asset(AssetInfo),
}

impl From<&str> for RateEndpoint {
    fn from(account: &str) -> Self {
        Self::Account(account.to_string())
    }
}

impl From<String> for RateEndpoint {
    fn from(account: String) -> Self {
        Self::Account(account)
    }
}

impl From<AssetInfo> for RateEndpoint {
    fn from(asset: AssetInfo) -> Self {
        Self::Asset(asset)
    }
}

/// Payment reported to a backend after it was forwarded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPaymentParams {
    pub source_account: String,
    pub destination_account: String,
    pub source_amount: String,
    pub destination_amount: String,
}

/// Exchange-rate backend
#[async_trait]
pub trait Backend: DowncastSync {
    /// Prepare the backend (fetch rates, open connections, ...)
    async fn connect(&self) -> Result<()>;

    /// Rate to apply when converting from `source` to `destination`
    async fn get_rate(&self, source: RateEndpoint, destination: RateEndpoint) -> Result<f64>;

    /// Record a completed payment
    async fn submit_payment(&self, params: SubmitPaymentParams) -> Result<()>;
}
impl_downcast!(sync Backend);

impl std::fmt::Debug for dyn Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend").finish_non_exhaustive()
    }
}
