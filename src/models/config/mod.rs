//! Configuration loading and validation.
//!
//! Networks are read from JSON files in a networks directory and contract
//! artifacts from a compiler output directory. Both go through the same
//! [`ConfigLoader`] interface.

use std::path::Path;

mod artifact_config;
mod error;
mod network_config;

pub(crate) use artifact_config::artifact_paths;
pub use error::ConfigError;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Loads every valid configuration found under `path`, keyed by name
	///
	/// Files that fail to load are skipped.
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>;

	/// Loads and validates a single configuration file
	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	fn validate(&self) -> Result<(), String>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
