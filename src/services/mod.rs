//! Core services implementing the contract lifecycle.
//!
//! - `blockchain`: RPC client, signer resolution and contract bindings
//! - `contract`: deployment and interaction built on top of the client

pub mod blockchain;
pub mod contract;
