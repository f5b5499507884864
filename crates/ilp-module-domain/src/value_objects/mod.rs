//! Value objects describing modules and the data they exchange

pub mod account;
pub mod capability;
pub mod instance;
pub mod options;
pub mod role;
pub mod services;

pub use account::{AccountInfo, AccountRelation, AssetInfo};
pub use capability::{Capability, CapabilitySet};
pub use instance::ModuleInstance;
pub use options::ModuleOptions;
pub use role::RoleType;
pub use services::{AccountInfoLookup, ModuleServices};
