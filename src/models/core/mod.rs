//! Core domain models for the contract lifecycle client.
//!
//! This module contains the fundamental data structures that represent:
//! - Networks: RPC endpoints, signer credentials and confirmation settings
//! - Contracts: compiled artifacts, deployed references and call results
//! - Secrets: credentials resolved at signing time

mod contract;
mod network;
mod secret;

pub use contract::{
	Asset, AssetCreation, ContractArtifact, ContractReference, DeploymentOutcome,
	TransactionOutcome, RWA_ASSET_ABI,
};
pub use network::{Network, RpcUrl};
pub use secret::{SecretError, SecretString, SecretValue};
