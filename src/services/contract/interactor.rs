//! Interaction with a deployed `RWAAsset` contract.

use alloy::{primitives::U256, sol_types::SolCall};

use crate::{
	models::{Asset, AssetCreation, ContractReference},
	services::{
		blockchain::{BlockChainError, EvmContractClientTrait, RWAAsset},
		contract::ContractError,
	},
};

/// Calls `createAsset` and `getAsset` on one deployed contract
pub struct AssetInteractor<C> {
	client: C,
	contract: ContractReference,
}

impl<C: EvmContractClientTrait> AssetInteractor<C> {
	/// Binds a client to a contract reference
	///
	/// # Errors
	/// Returns an interface error when the reference lacks one of the two
	/// functions or declares them with a different signature
	pub fn new(client: C, contract: ContractReference) -> Result<Self, ContractError> {
		let required = [
			("createAsset", RWAAsset::createAssetCall::SELECTOR),
			("getAsset", RWAAsset::getAssetCall::SELECTOR),
		];

		for (name, selector) in required {
			let function = contract.function(name).ok_or_else(|| {
				ContractError::interface_error(format!(
					"Contract interface does not declare {}",
					name
				))
			})?;

			if function.selector().0 != selector {
				return Err(ContractError::interface_error(format!(
					"{} is declared as {}, which does not match the contract",
					name,
					function.signature()
				)));
			}
		}

		Ok(Self { client, contract })
	}

	/// Creates an asset and waits until the transaction is confirmed
	///
	/// The call is simulated first, so a call the contract would reject fails
	/// without spending gas.
	///
	/// # Errors
	/// * `RevertError` - the node rejected the simulation, or the mined transaction reverted
	/// * `BlockChainError` - network, credential or confirmation failure
	#[tracing::instrument(skip(self), fields(contract = %self.contract.address))]
	pub async fn create_asset(
		&self,
		metadata: &str,
		value: U256,
	) -> Result<AssetCreation, ContractError> {
		let address = self.contract.address;

		// Only an answer from the node is a rejection by the contract
		let asset_id = match self
			.client
			.simulate_create_asset(address, metadata.to_string(), value)
			.await
		{
			Ok(asset_id) => asset_id,
			Err(BlockChainError::RequestError(msg)) => {
				return Err(ContractError::revert_error(format!(
					"createAsset would fail: {}",
					msg
				)));
			}
			Err(e) => return Err(e.into()),
		};

		tracing::debug!(%asset_id, "createAsset simulation succeeded");

		let transaction = self
			.client
			.create_asset(address, metadata.to_string(), value)
			.await?;

		if !transaction.status {
			return Err(ContractError::revert_error(format!(
				"createAsset reverted in transaction {}",
				transaction.transaction_hash
			)));
		}

		tracing::info!(
			tx_hash = %transaction.transaction_hash,
			block = transaction.block_number,
			%asset_id,
			"Asset created"
		);

		Ok(AssetCreation {
			asset_id,
			transaction,
		})
	}

	/// Reads an asset by id
	#[tracing::instrument(skip(self), fields(contract = %self.contract.address))]
	pub async fn get_asset(&self, asset_id: U256) -> Result<Asset, ContractError> {
		let asset = self.client.get_asset(self.contract.address, asset_id).await?;
		tracing::debug!(%asset_id, owner = %asset.owner, "Asset read");
		Ok(asset)
	}
}
