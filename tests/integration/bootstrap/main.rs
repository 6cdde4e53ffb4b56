use std::{fs, path::Path};

use tempfile::TempDir;

use rwa_asset_client::bootstrap::{create_deployer, create_interactor, load_network};

use crate::integration::mocks::{create_test_network, TEST_CONTRACT};

#[test]
fn test_shipped_network_configurations() {
	let config_dir = Path::new("config/networks");

	let localhost = load_network(Some(config_dir), "localhost").unwrap();
	assert_eq!(
		localhost.primary_rpc_url().unwrap().url,
		"http://127.0.0.1:8545"
	);
	assert!(!localhost.has_local_signer());

	let testnet = load_network(Some(config_dir), "xdc_testnet").unwrap();
	assert_eq!(testnet.chain_id, Some(51));
	assert_eq!(
		testnet.primary_rpc_url().unwrap().url,
		"https://erpc.apothem.network"
	);
	assert!(testnet.has_local_signer());
}

#[test]
fn test_unknown_network_lists_available() {
	let err = load_network(Some(Path::new("config/networks")), "mainnet").unwrap_err();
	let message = err.to_string();

	assert!(message.contains("mainnet"));
	assert!(message.contains("localhost"));
	assert!(message.contains("xdc_testnet"));
}

#[tokio::test]
async fn test_create_interactor_unreachable_node() {
	let network = create_test_network("localhost", "http://127.0.0.1:1");

	let err = match create_interactor(&network, TEST_CONTRACT).await {
		Ok(_) => panic!("interactor created without a node"),
		Err(err) => err,
	};
	assert!(err.to_string().starts_with("Connection error"));
}

#[tokio::test]
async fn test_create_deployer_unreachable_node() {
	let temp_dir = TempDir::new().unwrap();
	let artifact_dir = temp_dir.path().join("contracts/RWAAsset.sol");
	fs::create_dir_all(&artifact_dir).unwrap();
	fs::write(
		artifact_dir.join("RWAAsset.json"),
		r#"{
			"contractName": "RWAAsset",
			"sourceName": "contracts/RWAAsset.sol",
			"abi": [],
			"bytecode": "0x6080604052"
		}"#,
	)
	.unwrap();

	let network = create_test_network("localhost", "http://127.0.0.1:1");
	let err = match create_deployer(&network, Some(temp_dir.path())).await {
		Ok(_) => panic!("deployer created without a node"),
		Err(err) => err,
	};
	assert!(err.to_string().starts_with("Connection error"));
}
