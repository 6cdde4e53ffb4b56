//! Typed bindings for the subset of the `RWAAsset` contract this client calls.

#![allow(missing_docs)]

use alloy::sol;

sol! {
	#[sol(rpc)]
	contract RWAAsset {
		function createAsset(string memory metadata, uint256 value) public returns (uint256);
		function getAsset(uint256 assetId) public view returns (string memory, uint256, address);
	}
}
