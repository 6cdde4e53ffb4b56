//! Blockchain error types and handling.
//!
//! This module provides the error type for RPC and signing operations,
//! covering network connectivity, request processing, transaction
//! confirmation and credential problems.

use alloy::{
	contract::Error as AlloyContractError,
	providers::PendingTransactionError,
	transports::{RpcError, TransportError},
};
use log::error;

use crate::models::SecretError;

/// Represents possible errors that can occur during blockchain operations
#[derive(Debug)]
pub enum BlockChainError {
	/// Errors related to network connectivity issues
	ConnectionError(String),

	/// Errors related to malformed requests or invalid responses
	RequestError(String),

	/// Errors related to transaction submission or confirmation
	TransactionError(String),

	/// Errors related to credentials and signer resolution
	SignerError(String),
}

impl BlockChainError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::RequestError(msg) => format!("Request error: {}", msg),
			Self::TransactionError(msg) => format!("Transaction error: {}", msg),
			Self::SignerError(msg) => format!("Signer error: {}", msg),
		}
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new transaction error with logging
	pub fn transaction_error(msg: impl Into<String>) -> Self {
		let error = Self::TransactionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new signer error with logging
	pub fn signer_error(msg: impl Into<String>) -> Self {
		let error = Self::SignerError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for BlockChainError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for BlockChainError {}

/// Transport failures (refused connections, timeouts, HTTP errors) are
/// connection errors, everything else the node answered with is a request error
impl From<TransportError> for BlockChainError {
	fn from(err: TransportError) -> Self {
		match err {
			RpcError::Transport(kind) => Self::connection_error(kind.to_string()),
			other => Self::request_error(other.to_string()),
		}
	}
}

impl From<PendingTransactionError> for BlockChainError {
	fn from(err: PendingTransactionError) -> Self {
		Self::transaction_error(format!("Failed to confirm transaction: {}", err))
	}
}

impl From<AlloyContractError> for BlockChainError {
	fn from(err: AlloyContractError) -> Self {
		match err {
			AlloyContractError::TransportError(err) => err.into(),
			AlloyContractError::PendingTransactionError(err) => err.into(),
			other => Self::request_error(other.to_string()),
		}
	}
}

impl From<SecretError> for BlockChainError {
	fn from(err: SecretError) -> Self {
		Self::signer_error(err.to_string())
	}
}
