//! Secret handling for credentials referenced from configuration.
//!
//! Secrets are either written inline or read from an environment variable when
//! they are needed. Resolved values are wiped from memory when dropped.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

const REDACTED: &str = "REDACTED";

/// A string that is zeroized on drop and never printed
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// Exposes the underlying value
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.trim().is_empty()
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SecretString({})", REDACTED)
	}
}

impl Serialize for SecretString {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(REDACTED)
	}
}

impl<'de> Deserialize<'de> for SecretString {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		String::deserialize(deserializer).map(Self::new)
	}
}

/// Errors raised while resolving a secret
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SecretError {
	#[error("Environment variable '{0}' is not set")]
	MissingEnvironmentVariable(String),

	#[error("Secret is empty")]
	Empty,
}

/// Where a secret comes from
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value")]
pub enum SecretValue {
	/// Value written directly in the configuration file
	Plain(SecretString),

	/// Name of an environment variable holding the value
	Environment(String),
}

impl SecretValue {
	/// Resolves the secret to its value
	pub fn resolve(&self) -> Result<SecretString, SecretError> {
		let secret = match self {
			Self::Plain(secret) => secret.clone(),
			Self::Environment(name) => std::env::var(name)
				.map(SecretString::new)
				.map_err(|_| SecretError::MissingEnvironmentVariable(name.clone()))?,
		};

		if secret.is_empty() {
			return Err(SecretError::Empty);
		}

		Ok(secret)
	}
}
