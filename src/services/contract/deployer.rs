//! Contract deployment.
//!
//! Resolves a compiled contract by name, sends its creation transaction with
//! the network's signer and reports the address once the deployment is
//! confirmed.

use crate::{
	models::DeploymentOutcome,
	repositories::ArtifactRepositoryTrait,
	services::{blockchain::EvmContractClientTrait, contract::ContractError},
};

/// Deploys compiled contracts through an EVM client
pub struct ContractDeployer<C, R> {
	client: C,
	artifacts: R,
}

impl<C: EvmContractClientTrait, R: ArtifactRepositoryTrait> ContractDeployer<C, R> {
	pub fn new(client: C, artifacts: R) -> Self {
		Self { client, artifacts }
	}

	/// Deploys the named contract and waits until it is confirmed
	///
	/// # Arguments
	/// * `contract_name` - Name of the compiled contract, e.g. `RWAAsset`
	///
	/// # Returns
	/// * `Result<DeploymentOutcome, ContractError>` - The deployed address and receipt data
	///
	/// # Errors
	/// * `ArtifactError` - the contract cannot be resolved or is not deployable
	/// * `DeploymentError` - the creation transaction reverted or created no contract
	/// * `BlockChainError` - network, credential or confirmation failure
	#[tracing::instrument(skip(self), fields(sender = %self.client.sender()))]
	pub async fn deploy(&self, contract_name: &str) -> Result<DeploymentOutcome, ContractError> {
		let artifact = self.artifacts.resolve(contract_name)?;
		let chain_id = self.client.chain_id().await?;

		tracing::info!(
			contract = %artifact.contract_name,
			chain_id,
			bytecode_size = artifact.bytecode.len(),
			"Deploying contract"
		);

		let transaction = self.client.deploy_contract(artifact.bytecode).await?;

		if !transaction.status {
			return Err(ContractError::deployment_error(format!(
				"{} deployment reverted in transaction {}",
				contract_name, transaction.transaction_hash
			)));
		}

		let address = transaction.contract_address.ok_or_else(|| {
			ContractError::deployment_error(format!(
				"Receipt of transaction {} carries no contract address",
				transaction.transaction_hash
			))
		})?;

		tracing::info!(
			contract = contract_name,
			%address,
			tx_hash = %transaction.transaction_hash,
			block = transaction.block_number,
			"Contract deployed"
		);

		Ok(DeploymentOutcome {
			contract_name: contract_name.to_string(),
			chain_id,
			address,
			transaction,
		})
	}
}
