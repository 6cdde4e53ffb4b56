//! Domain models and data structures for the contract lifecycle client.
//!
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (Network, ContractArtifact, ContractReference)

mod config;
mod core;

// Re-export core types
pub use self::core::{
	Asset, AssetCreation, ContractArtifact, ContractReference, DeploymentOutcome, Network,
	RpcUrl, SecretError, SecretString, SecretValue, TransactionOutcome, RWA_ASSET_ABI,
};

// Re-export config types
pub use config::{ConfigError, ConfigLoader};
pub(crate) use config::artifact_paths;
