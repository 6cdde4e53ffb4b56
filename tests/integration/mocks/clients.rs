//! Mock implementation of the contract client.
//!
//! [`MockEvmContractClientTrait`] lets the deployer and the interactor be
//! exercised without a node.

use alloy::primitives::{Address, Bytes, U256};
use async_trait::async_trait;
use mockall::mock;

use rwa_asset_client::{
	models::{Asset, TransactionOutcome},
	services::blockchain::{BlockChainError, EvmContractClientTrait},
};

mock! {
	/// Mock implementation of the EVM contract client trait.
	pub EvmContractClientTrait {}

	#[async_trait]
	impl EvmContractClientTrait for EvmContractClientTrait {
		fn sender(&self) -> Address;
		async fn chain_id(&self) -> Result<u64, BlockChainError>;
		async fn deploy_contract(&self, bytecode: Bytes) -> Result<TransactionOutcome, BlockChainError>;
		async fn simulate_create_asset(
			&self,
			contract: Address,
			metadata: String,
			value: U256,
		) -> Result<U256, BlockChainError>;
		async fn create_asset(
			&self,
			contract: Address,
			metadata: String,
			value: U256,
		) -> Result<TransactionOutcome, BlockChainError>;
		async fn get_asset(&self, contract: Address, asset_id: U256) -> Result<Asset, BlockChainError>;
	}
}
