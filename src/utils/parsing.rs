//! Parsing utilities
//!
//! Parsers for command line values. They return `String` errors so they can be
//! plugged into `clap` value parsers directly.

use alloy::primitives::{Address, U256};
use std::str::FromStr;

/// Parses a 20-byte hex address with a `0x` prefix.
///
/// Mixed-case input must carry a valid EIP-55 checksum; all-lowercase and
/// all-uppercase input is accepted as is.
pub fn parse_address(s: &str) -> Result<Address, String> {
	let s = s.trim();
	let hex = s
		.strip_prefix("0x")
		.ok_or_else(|| format!("Invalid address '{}': missing 0x prefix", s))?;

	if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err(format!(
			"Invalid address '{}': expected 40 hexadecimal characters",
			s
		));
	}

	let is_mixed_case = hex.chars().any(|c| c.is_ascii_lowercase())
		&& hex.chars().any(|c| c.is_ascii_uppercase());
	if is_mixed_case {
		return Address::parse_checksummed(s, None)
			.map_err(|e| format!("Invalid address '{}': {}", s, e));
	}

	Address::from_str(s).map_err(|e| format!("Invalid address '{}': {}", s, e))
}

/// Parses an unsigned 256-bit integer in decimal or `0x` prefixed hex.
pub fn parse_u256(s: &str) -> Result<U256, String> {
	let s = s.trim();
	if s.is_empty() || s.starts_with('-') {
		return Err(format!("Invalid uint256 '{}'", s));
	}
	U256::from_str(s).map_err(|e| format!("Invalid uint256 '{}': {}", s, e))
}
