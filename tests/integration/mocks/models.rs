use alloy::{
	json_abi::JsonAbi,
	primitives::{address, b256, Address, Bytes, TxHash},
};
use rwa_asset_client::models::{ContractArtifact, Network, RpcUrl, TransactionOutcome};

pub const TEST_SENDER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
pub const TEST_CONTRACT: Address = address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512");
pub const TEST_TX_HASH: TxHash =
	b256!("5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060");

pub fn create_test_network(slug: &str, url: &str) -> Network {
	Network {
		slug: slug.to_string(),
		name: slug.to_string(),
		rpc_urls: vec![RpcUrl {
			type_: "rpc".to_string(),
			url: url.to_string(),
			weight: 100,
		}],
		chain_id: None,
		accounts: vec![],
		confirmation_blocks: 1,
		confirmation_timeout_ms: None,
	}
}

pub fn create_test_artifact(name: &str) -> ContractArtifact {
	ContractArtifact {
		contract_name: name.to_string(),
		source_name: Some(format!("contracts/{}.sol", name)),
		abi: JsonAbi::default(),
		bytecode: Bytes::from_static(&[0x60, 0x80, 0x60, 0x40, 0x52]),
	}
}

pub fn create_test_transaction(status: bool, contract_address: Option<Address>) -> TransactionOutcome {
	TransactionOutcome {
		transaction_hash: TEST_TX_HASH,
		block_number: Some(1),
		gas_used: 21_000,
		status,
		contract_address,
	}
}
