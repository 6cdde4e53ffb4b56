use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::SecretValue;

/// A single JSON-RPC endpoint of a network
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RpcUrl {
	pub type_: String,
	pub url: String,
	pub weight: u32,
}

/// Configuration of a network the contract can be deployed to or called on
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Network {
	/// Unique identifier used on the command line
	pub slug: String,

	/// Human readable name
	pub name: String,

	/// Available RPC endpoints
	pub rpc_urls: Vec<RpcUrl>,

	/// Expected chain id, checked against the node before any write
	#[serde(default)]
	pub chain_id: Option<u64>,

	/// Credentials used to sign transactions. When empty, the node's own
	/// unlocked account signs.
	#[serde(default)]
	pub accounts: Vec<SecretValue>,

	/// Number of blocks a transaction must be buried under before it is confirmed
	#[serde(default = "default_confirmation_blocks")]
	pub confirmation_blocks: u64,

	/// Upper bound on the confirmation wait. Waits indefinitely when unset.
	#[serde(default)]
	pub confirmation_timeout_ms: Option<u64>,
}

fn default_confirmation_blocks() -> u64 {
	1
}

impl Network {
	/// Returns the highest-weight usable RPC endpoint
	pub fn primary_rpc_url(&self) -> Option<&RpcUrl> {
		self.rpc_urls
			.iter()
			.filter(|rpc_url| rpc_url.type_ == "rpc" && rpc_url.weight > 0)
			.max_by_key(|rpc_url| rpc_url.weight)
	}

	pub fn confirmation_timeout(&self) -> Option<Duration> {
		self.confirmation_timeout_ms.map(Duration::from_millis)
	}

	/// Whether transactions are signed locally rather than by the node
	pub fn has_local_signer(&self) -> bool {
		!self.accounts.is_empty()
	}
}
