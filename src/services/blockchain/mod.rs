//! Blockchain client interfaces and implementations.
//!
//! Provides the pieces needed to talk to an EVM node:
//!
//! - Typed bindings for the `RWAAsset` contract
//! - Signer resolution from network credentials
//! - An alloy backed client for deploying and calling the contract
//! - Error handling for blockchain operations

mod bindings;
mod client;
mod error;
mod signer;

pub use bindings::RWAAsset;
pub use client::{EvmContractClient, EvmContractClientTrait};
pub use error::BlockChainError;
pub use signer::resolve_signer;
