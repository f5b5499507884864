//! Members a module instance exposes

use std::collections::BTreeSet;

/// A single member of a role contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    // logger
    Namespace,
    Info,
    Warn,
    Error,
    Debug,
    Trace,
    // store
    Get,
    Put,
    Delete,
    // plugin and backend
    Connect,
    Disconnect,
    IsConnected,
    SendData,
    SendMoney,
    RegisterDataHandler,
    DeregisterDataHandler,
    RegisterMoneyHandler,
    DeregisterMoneyHandler,
    GetRate,
    SubmitPayment,
}

/// Set of capabilities reported by an instance or required by a role
pub type CapabilitySet = BTreeSet<Capability>;

impl Capability {
    /// Write operations of the `Logger` contract
    pub const LOGGER_WRITERS: &'static [Capability] = &[
        Capability::Info,
        Capability::Warn,
        Capability::Error,
        Capability::Debug,
        Capability::Trace,
    ];

    /// Members of the `Store` contract
    pub const STORE: &'static [Capability] =
        &[Capability::Get, Capability::Put, Capability::Delete];

    /// Members of the `Plugin` contract
    pub const PLUGIN: &'static [Capability] = &[
        Capability::Connect,
        Capability::Disconnect,
        Capability::IsConnected,
        Capability::SendData,
        Capability::SendMoney,
        Capability::RegisterDataHandler,
        Capability::DeregisterDataHandler,
        Capability::RegisterMoneyHandler,
        Capability::DeregisterMoneyHandler,
    ];

    /// Members of the `Backend` contract
    pub const BACKEND: &'static [Capability] = &[
        Capability::Connect,
        Capability::GetRate,
        Capability::SubmitPayment,
    ];
}
