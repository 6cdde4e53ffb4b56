//! Contract operation error types.
//!
//! Errors raised while deploying the contract or calling it. Failures that
//! originate in the RPC layer keep their [`BlockChainError`] so callers can
//! tell an unreachable node from a contract revert.

use log::error;

use crate::{repositories::RepositoryError, services::blockchain::BlockChainError};

/// Represents possible errors during contract operations
#[derive(Debug)]
pub enum ContractError {
	/// The compiled contract could not be resolved
	ArtifactError(String),

	/// The contract reference or its interface is invalid
	InterfaceError(String),

	/// The deployment was mined but did not produce a contract
	DeploymentError(String),

	/// The contract rejected the call
	RevertError(String),

	/// The underlying RPC or signing operation failed
	BlockChainError(BlockChainError),
}

impl ContractError {
	fn format_message(&self) -> String {
		match self {
			Self::ArtifactError(msg) => format!("Artifact error: {}", msg),
			Self::InterfaceError(msg) => format!("Interface error: {}", msg),
			Self::DeploymentError(msg) => format!("Deployment error: {}", msg),
			Self::RevertError(msg) => format!("Revert error: {}", msg),
			Self::BlockChainError(err) => format!("Blockchain error: {}", err),
		}
	}

	/// Creates a new artifact error with logging
	pub fn artifact_error(msg: impl Into<String>) -> Self {
		let error = Self::ArtifactError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new interface error with logging
	pub fn interface_error(msg: impl Into<String>) -> Self {
		let error = Self::InterfaceError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new deployment error with logging
	pub fn deployment_error(msg: impl Into<String>) -> Self {
		let error = Self::DeploymentError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new revert error with logging
	pub fn revert_error(msg: impl Into<String>) -> Self {
		let error = Self::RevertError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for ContractError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for ContractError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::BlockChainError(err) => Some(err),
			_ => None,
		}
	}
}

/// Already logged when the blockchain error was created
impl From<BlockChainError> for ContractError {
	fn from(err: BlockChainError) -> Self {
		Self::BlockChainError(err)
	}
}

impl From<RepositoryError> for ContractError {
	fn from(err: RepositoryError) -> Self {
		Self::ArtifactError(err.to_string())
	}
}
