//! Transaction signer resolution.
//!
//! A network either carries its own credentials, in which case transactions are
//! signed locally with a private key, or leaves signing to the node's unlocked
//! account (the usual setup of a local development node).

use alloy::signers::local::PrivateKeySigner;

use crate::{models::Network, services::blockchain::BlockChainError};

/// Parses a hex encoded private key, with or without the `0x` prefix
pub fn parse_private_key(key: &str) -> Result<PrivateKeySigner, BlockChainError> {
	let key = key.trim();
	let key = key.strip_prefix("0x").unwrap_or(key);

	if key.len() != 64 || !key.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err(BlockChainError::signer_error(
			"Private key must be 32 bytes of hex",
		));
	}

	key.parse::<PrivateKeySigner>()
		.map_err(|e| BlockChainError::signer_error(format!("Invalid private key: {}", e)))
}

/// Resolves the local signer configured for a network
///
/// # Returns
/// * `Ok(Some(signer))` - The first configured account
/// * `Ok(None)` - No account configured, the node signs
///
/// # Errors
/// Returns a signer error when the credential is missing or malformed
pub fn resolve_signer(network: &Network) -> Result<Option<PrivateKeySigner>, BlockChainError> {
	let Some(account) = network.accounts.first() else {
		return Ok(None);
	};

	if network.accounts.len() > 1 {
		tracing::debug!(
			network = %network.slug,
			accounts = network.accounts.len(),
			"Multiple accounts configured, using the first"
		);
	}

	let secret = account.resolve()?;
	parse_private_key(secret.as_str()).map(Some)
}
