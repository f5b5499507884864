//! One-to-one backend
//!
//! Trades every asset at par, adjusted only for the difference in asset
//! scale and marked down by a fixed spread:
//!
//! ```text
//! rate = (1 - spread) * 10^(destination scale - source scale)
//! ```
//!
//! The spread is subtracted in both directions, so the destination amount
//! always ends up slightly below the equivalent source amount.

use std::sync::Arc;

use async_trait::async_trait;
use ilp_module_domain::error::{Error, Result};
use ilp_module_domain::ports::{RateEndpoint, SubmitPaymentParams};
use ilp_module_domain::value_objects::{AccountInfoLookup, AssetInfo};
use ilp_module_domain::{Backend, Logger, ModuleInstance, ModuleOptions, ModuleServices};
use serde::Deserialize;

/// Significant digits kept in computed rates
const RATE_PRECISION: usize = 15;

/// Options accepted by [`OneToOneBackend`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OneToOneBackendOptions {
    /// Fraction subtracted from every rate; missing or null means no spread
    #[serde(default)]
    pub spread: Option<f64>,
}

/// Backend applying a fixed one-to-one rate minus a spread
pub struct OneToOneBackend {
    spread: f64,
    get_info: AccountInfoLookup,
    log: Arc<dyn Logger>,
}

impl OneToOneBackend {
    /// Create the backend; the services must provide an account-info lookup
    pub fn new(options: OneToOneBackendOptions, services: ModuleServices) -> Result<Self> {
        let get_info = services.get_info.ok_or_else(|| {
            Error::missing_service("OneToOneBackend", "backend service for getting account info")
        })?;
        Ok(Self {
            spread: options.spread.unwrap_or(0.0),
            get_info,
            log: services.log,
        })
    }

    pub fn spread(&self) -> f64 {
        self.spread
    }

    fn asset(&self, endpoint: RateEndpoint, side: &str) -> Result<AssetInfo> {
        match endpoint {
            RateEndpoint::Asset(asset) => Ok(asset),
            RateEndpoint::Account(account_id) => match (self.get_info)(&account_id) {
                Some(info) => Ok(info.asset()),
                None => {
                    let message = format!(
                        "unable to fetch account info for {side} account. accountId={account_id}"
                    );
                    self.log.error(&message);
                    Err(Error::backend(message))
                }
            },
        }
    }
}

impl std::fmt::Debug for OneToOneBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneToOneBackend")
            .field("spread", &self.spread)
            .finish()
    }
}

#[async_trait]
impl Backend for OneToOneBackend {
    async fn connect(&self) -> Result<()> {
        Ok(())
    }

    async fn get_rate(&self, source: RateEndpoint, destination: RateEndpoint) -> Result<f64> {
        let source = self.asset(source, "source")?;
        let destination = self.asset(destination, "destination")?;

        let scale_diff = destination.scale.checked_sub(source.scale).ok_or_else(|| {
            Error::backend(format!(
                "scale difference out of range. sourceScale={}, destinationScale={}",
                source.scale, destination.scale
            ))
        })?;
        round_significant((1.0 - self.spread) * 10f64.powi(scale_diff), RATE_PRECISION)
    }

    async fn submit_payment(&self, _params: SubmitPaymentParams) -> Result<()> {
        Ok(())
    }
}

/// Round `value` to `digits` significant digits
fn round_significant(value: f64, digits: usize) -> Result<f64> {
    let precision = digits.saturating_sub(1);
    format!("{value:.precision$e}")
        .parse::<f64>()
        .map_err(|e| Error::backend(format!("unable to round rate {value}: {e}")))
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use ilp_module_application::registry::{BUILTIN_MODULES, ModuleEntry, ModuleExport};

/// Factory function for creating one-to-one backend instances.
fn one_to_one_backend_factory(
    options: ModuleOptions,
    services: Option<ModuleServices>,
) -> Result<ModuleInstance> {
    let options: OneToOneBackendOptions = options.deserialize("one-to-one")?;
    let services = services.ok_or_else(|| {
        Error::missing_service("OneToOneBackend", "backend service for getting account info")
    })?;
    Ok(ModuleInstance::backend(OneToOneBackend::new(options, services)?))
}

#[linkme::distributed_slice(BUILTIN_MODULES)]
static ONE_TO_ONE_BACKEND: ModuleEntry = ModuleEntry {
    role: "backend",
    name: "one-to-one",
    description: "Backend trading at par minus a spread",
    export: ModuleExport::default_export(one_to_one_backend_factory),
};
