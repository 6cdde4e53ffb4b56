//! Error types for repository operations.
//!
//! Errors raised while loading networks and contract artifacts, or while
//! looking up an entry that does not exist.

use log::error;
use std::error::Error;
use std::fmt;

/// Errors that can occur during repository operations
#[derive(Debug)]
pub enum RepositoryError {
	/// Error that occurs when configuration validation fails
	ValidationError(String),

	/// Error that occurs when loading configurations from files
	LoadError(String),

	/// Error that occurs when a requested entry does not exist
	NotFound(String),
}

impl RepositoryError {
	/// Format an error message for display
	///
	/// Creates a human-readable error message based on the error type.
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
			Self::LoadError(msg) => format!("Load error: {}", msg),
			Self::NotFound(msg) => format!("Not found: {}", msg),
		}
	}

	/// Create a new validation error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new load error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn load_error(msg: impl Into<String>) -> Self {
		let error = Self::LoadError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new not found error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn not_found(msg: impl Into<String>) -> Self {
		let error = Self::NotFound(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for RepositoryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for RepositoryError {}

impl From<std::io::Error> for RepositoryError {
	fn from(err: std::io::Error) -> Self {
		Self::load_error(err.to_string())
	}
}

impl From<crate::models::ConfigError> for RepositoryError {
	fn from(err: crate::models::ConfigError) -> Self {
		match err {
			crate::models::ConfigError::ValidationError(msg) => Self::ValidationError(msg),
			other => Self::LoadError(other.to_string()),
		}
	}
}
