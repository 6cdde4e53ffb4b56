use alloy::primitives::{address, U256};
use mockall::predicate;
use tracing_test::traced_test;

use rwa_asset_client::{
	models::{Asset, ContractReference},
	services::{
		blockchain::BlockChainError,
		contract::{AssetInteractor, ContractError},
	},
};

use crate::integration::mocks::{
	create_test_transaction, MockEvmContractClientTrait, TEST_CONTRACT, TEST_SENDER,
};

const METADATA: &str = "Gold-backed token";

fn rwa_asset() -> ContractReference {
	ContractReference::rwa_asset(TEST_CONTRACT).unwrap()
}

#[tokio::test]
#[traced_test]
async fn test_create_asset_returns_transaction_hash() {
	let mut client = MockEvmContractClientTrait::new();
	client
		.expect_simulate_create_asset()
		.with(
			predicate::eq(TEST_CONTRACT),
			predicate::eq(METADATA.to_string()),
			predicate::eq(U256::from(1000)),
		)
		.times(1)
		.returning(|_, _, _| Ok(U256::from(1)));
	client
		.expect_create_asset()
		.with(
			predicate::eq(TEST_CONTRACT),
			predicate::eq(METADATA.to_string()),
			predicate::eq(U256::from(1000)),
		)
		.times(1)
		.returning(|_, _, _| Ok(create_test_transaction(true, None)));

	let interactor = AssetInteractor::new(client, rwa_asset()).unwrap();
	let creation = interactor
		.create_asset(METADATA, U256::from(1000))
		.await
		.unwrap();

	assert_eq!(creation.asset_id, U256::from(1));
	assert!(!creation.transaction.transaction_hash.is_zero());
	assert!(creation
		.transaction
		.transaction_hash
		.to_string()
		.starts_with("0x"));
	assert!(logs_contain("Asset created"));
}

#[tokio::test]
async fn test_create_asset_simulation_failure_sends_nothing() {
	let mut client = MockEvmContractClientTrait::new();
	client.expect_simulate_create_asset().returning(|_, _, _| {
		Err(BlockChainError::request_error(
			"execution reverted: value must be positive",
		))
	});
	client.expect_create_asset().never();

	let interactor = AssetInteractor::new(client, rwa_asset()).unwrap();
	let err = interactor
		.create_asset(METADATA, U256::ZERO)
		.await
		.unwrap_err();

	assert!(matches!(err, ContractError::RevertError(_)));
	assert!(err.to_string().contains("value must be positive"));
}

#[tokio::test]
async fn test_create_asset_unreachable_node_is_not_a_revert() {
	let mut client = MockEvmContractClientTrait::new();
	client.expect_simulate_create_asset().returning(|_, _, _| {
		Err(BlockChainError::connection_error(
			"error sending request: connection refused",
		))
	});
	client.expect_create_asset().never();

	let interactor = AssetInteractor::new(client, rwa_asset()).unwrap();
	let err = interactor
		.create_asset(METADATA, U256::from(1000))
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		ContractError::BlockChainError(BlockChainError::ConnectionError(_))
	));
}

#[tokio::test]
async fn test_create_asset_signer_failure_is_not_a_revert() {
	let mut client = MockEvmContractClientTrait::new();
	client
		.expect_simulate_create_asset()
		.returning(|_, _, _| Err(BlockChainError::signer_error("no unlocked account")));
	client.expect_create_asset().never();

	let interactor = AssetInteractor::new(client, rwa_asset()).unwrap();
	let err = interactor
		.create_asset(METADATA, U256::from(1000))
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		ContractError::BlockChainError(BlockChainError::SignerError(_))
	));
}

#[tokio::test]
async fn test_create_asset_reverted_on_chain() {
	let mut client = MockEvmContractClientTrait::new();
	client
		.expect_simulate_create_asset()
		.returning(|_, _, _| Ok(U256::from(1)));
	client
		.expect_create_asset()
		.returning(|_, _, _| Ok(create_test_transaction(false, None)));

	let interactor = AssetInteractor::new(client, rwa_asset()).unwrap();
	let err = interactor
		.create_asset(METADATA, U256::from(1000))
		.await
		.unwrap_err();

	assert!(matches!(err, ContractError::RevertError(_)));
}

#[tokio::test]
async fn test_create_asset_confirmation_timeout() {
	let mut client = MockEvmContractClientTrait::new();
	client
		.expect_simulate_create_asset()
		.returning(|_, _, _| Ok(U256::from(1)));
	client.expect_create_asset().returning(|_, _, _| {
		Err(BlockChainError::transaction_error(
			"Transaction was not confirmed in time",
		))
	});

	let interactor = AssetInteractor::new(client, rwa_asset()).unwrap();
	let err = interactor
		.create_asset(METADATA, U256::from(1000))
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		ContractError::BlockChainError(BlockChainError::TransactionError(_))
	));
}

#[tokio::test]
async fn test_get_asset_returns_created_asset() {
	let owner = TEST_SENDER;
	let mut client = MockEvmContractClientTrait::new();
	client
		.expect_get_asset()
		.with(predicate::eq(TEST_CONTRACT), predicate::eq(U256::from(1)))
		.returning(move |_, _| {
			Ok(Asset {
				metadata: METADATA.to_string(),
				value: U256::from(1000),
				owner,
			})
		});

	let interactor = AssetInteractor::new(client, rwa_asset()).unwrap();
	let asset = interactor.get_asset(U256::from(1)).await.unwrap();

	assert_eq!(asset.metadata, METADATA);
	assert_eq!(asset.value, U256::from(1000));
	assert_eq!(asset.owner, owner);
}

#[test]
fn test_interface_without_create_asset_is_rejected() {
	let contract = ContractReference::new(
		TEST_CONTRACT,
		&["function getAsset(uint256 assetId) public view returns (string memory, uint256, address)"],
	)
	.unwrap();

	let result = AssetInteractor::new(MockEvmContractClientTrait::new(), contract);
	assert!(matches!(result, Err(ContractError::InterfaceError(_))));
}

#[test]
fn test_interface_with_wrong_signature_is_rejected() {
	let contract = ContractReference::new(
		address!("0000000000000000000000000000000000000001"),
		&[
			"function createAsset(string memory metadata) public returns (uint256)",
			"function getAsset(uint256 assetId) public view returns (string memory, uint256, address)",
		],
	)
	.unwrap();

	let err = match AssetInteractor::new(MockEvmContractClientTrait::new(), contract) {
		Ok(_) => panic!("mismatched interface accepted"),
		Err(err) => err,
	};
	assert!(matches!(err, ContractError::InterfaceError(_)));
	assert!(err.to_string().contains("createAsset(string)"));
}
