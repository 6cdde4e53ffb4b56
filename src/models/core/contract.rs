//! Contract related domain models.
//!
//! Covers the compiled artifact a deployment starts from, the reference used to
//! call a deployed instance, and the results reported back to the user.

use alloy::{
	json_abi::{Function, JsonAbi},
	primitives::{Address, Bytes, TxHash, U256},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human readable ABI fragment of the two `RWAAsset` functions this client calls
pub const RWA_ASSET_ABI: [&str; 2] = [
	"function createAsset(string memory metadata, uint256 value) public returns (uint256)",
	"function getAsset(uint256 assetId) public view returns (string memory, uint256, address)",
];

/// Compiler output for a single contract (Hardhat artifact format)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
	pub contract_name: String,
	#[serde(default)]
	pub source_name: Option<String>,
	pub abi: JsonAbi,
	/// Creation bytecode
	pub bytecode: Bytes,
}

impl ContractArtifact {
	/// Abstract contracts and interfaces carry no creation code
	pub fn is_deployable(&self) -> bool {
		!self.bytecode.is_empty()
	}

	/// Whether the contract takes constructor arguments
	pub fn has_constructor_inputs(&self) -> bool {
		self.abi
			.constructor
			.as_ref()
			.map(|constructor| !constructor.inputs.is_empty())
			.unwrap_or(false)
	}
}

/// A deployed contract together with the functions it is called through
#[derive(Debug, Clone, PartialEq)]
pub struct ContractReference {
	pub address: Address,
	pub interface: Vec<Function>,
}

impl ContractReference {
	/// Builds a reference from human readable function signatures
	///
	/// # Errors
	/// Returns the offending signature when it cannot be parsed
	pub fn new(address: Address, signatures: &[&str]) -> Result<Self, String> {
		let interface = signatures
			.iter()
			.map(|signature| {
				Function::parse(signature)
					.map_err(|e| format!("Invalid function signature '{}': {}", signature, e))
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self { address, interface })
	}

	/// Reference to an `RWAAsset` deployment
	pub fn rwa_asset(address: Address) -> Result<Self, String> {
		Self::new(address, &RWA_ASSET_ABI)
	}

	pub fn function(&self, name: &str) -> Option<&Function> {
		self.interface.iter().find(|function| function.name == name)
	}
}

/// What the network reports for a confirmed transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionOutcome {
	pub transaction_hash: TxHash,
	pub block_number: Option<u64>,
	pub gas_used: u64,
	pub status: bool,
	pub contract_address: Option<Address>,
}

/// Result of a contract deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentOutcome {
	pub contract_name: String,
	pub chain_id: u64,
	pub address: Address,
	pub transaction: TransactionOutcome,
}

/// Result of a `createAsset` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetCreation {
	/// Id returned by simulating the call against the latest state. The mined
	/// id differs if another asset was created in between.
	pub asset_id: U256,
	pub transaction: TransactionOutcome,
}

/// An asset as stored by the contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
	pub metadata: String,
	pub value: U256,
	pub owner: Address,
}

impl fmt::Display for Asset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"metadata: {}, value: {}, owner: {}",
			self.metadata, self.value, self.owner
		)
	}
}
