//! Bootstrap module for wiring configuration into services.
//!
//! The CLI commands share the same setup: load the selected network, connect a
//! client to it and hand that client to the deployer or the interactor. This
//! module keeps that wiring out of `main` and formats the lines each command
//! prints.
//!
//! # Services
//! - `ContractDeployer`: deploys a compiled contract
//! - `AssetInteractor`: calls `createAsset` / `getAsset` on a deployed contract

use alloy::primitives::Address;
use std::{error::Error, path::Path};

use crate::{
	models::{AssetCreation, ContractReference, DeploymentOutcome, Network},
	repositories::{ArtifactRepository, NetworkRepository, NetworkService},
	services::{
		blockchain::EvmContractClient,
		contract::{AssetInteractor, ContractDeployer, ContractError},
	},
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Loads the network configuration identified by `slug`
///
/// # Arguments
/// * `config_dir` - Directory holding network JSON files, `config/networks` when `None`
/// * `slug` - Network identifier
///
/// # Errors
/// Returns an error if the directory cannot be read or the network does not exist
pub fn load_network(config_dir: Option<&Path>, slug: &str) -> Result<Network> {
	let network_service = NetworkService::<NetworkRepository>::new(config_dir)?;
	Ok(network_service.resolve(slug)?)
}

/// Creates a deployer connected to `network`
///
/// The artifacts directory is checked before connecting, so a missing
/// compilation fails without touching the network.
pub async fn create_deployer(
	network: &Network,
	artifacts_dir: Option<&Path>,
) -> Result<ContractDeployer<EvmContractClient, ArtifactRepository>> {
	let artifacts = ArtifactRepository::new(artifacts_dir)?;
	let client = EvmContractClient::new(network).await?;
	Ok(ContractDeployer::new(client, artifacts))
}

/// Creates an interactor for the `RWAAsset` contract at `address`
pub async fn create_interactor(
	network: &Network,
	address: Address,
) -> Result<AssetInteractor<EvmContractClient>> {
	let contract = ContractReference::rwa_asset(address).map_err(ContractError::interface_error)?;
	let client = EvmContractClient::new(network).await?;
	Ok(AssetInteractor::new(client, contract)?)
}

/// Line printed after a successful deployment
pub fn deployment_message(outcome: &DeploymentOutcome) -> String {
	format!("{} deployed to: {}", outcome.contract_name, outcome.address)
}

/// Line printed after a successful `createAsset`
pub fn asset_creation_message(creation: &AssetCreation) -> String {
	format!(
		"Asset Created, TX Hash: {}",
		creation.transaction.transaction_hash
	)
}
