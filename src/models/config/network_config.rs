use std::path::Path;

use crate::models::{ConfigLoader, Network};

use super::error::ConfigError;

const DEFAULT_NETWORKS_DIR: &str = "config/networks";

impl ConfigLoader for Network {
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let network_dir = path.unwrap_or(Path::new(DEFAULT_NETWORKS_DIR));
		let mut pairs = Vec::new();

		if !network_dir.exists() {
			return Err(ConfigError::file_error(format!(
				"networks directory not found: {}",
				network_dir.display()
			)));
		}

		for entry in std::fs::read_dir(network_dir)? {
			let path = entry?.path();

			if !Self::is_json_file(&path) {
				continue;
			}

			match Self::load_from_path(&path) {
				Ok(network) => pairs.push((network.slug.clone(), network)),
				Err(e) => {
					tracing::warn!(
						path = %path.display(),
						error = %e,
						"Skipping invalid network configuration"
					);
				}
			}
		}

		Ok(T::from_iter(pairs))
	}

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let config: Network = serde_json::from_reader(file)?;

		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(validation_error));
		}

		Ok(config)
	}

	fn validate(&self) -> Result<(), String> {
		if self.slug.is_empty()
			|| !self
				.slug
				.chars()
				.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
		{
			return Err(
				"Slug must contain only lowercase letters, numbers, and underscores".to_string(),
			);
		}

		if self.name.trim().is_empty() {
			return Err("Network name is required".to_string());
		}

		if self.rpc_urls.is_empty() {
			return Err("At least one RPC URL is required".to_string());
		}

		let supported_types = ["rpc"];
		if !self
			.rpc_urls
			.iter()
			.all(|rpc_url| supported_types.contains(&rpc_url.type_.as_str()))
		{
			return Err(format!(
				"RPC URL type must be one of: {}",
				supported_types.join(", ")
			));
		}

		if !self.rpc_urls.iter().all(|rpc_url| {
			rpc_url.url.starts_with("http://") || rpc_url.url.starts_with("https://")
		}) {
			return Err("All RPC URLs must start with http:// or https://".to_string());
		}

		if !self.rpc_urls.iter().all(|rpc_url| rpc_url.weight <= 100) {
			return Err("All RPC URL weights must be between 0 and 100".to_string());
		}

		if self.primary_rpc_url().is_none() {
			return Err("At least one RPC URL must have a weight greater than 0".to_string());
		}

		if self.chain_id == Some(0) {
			return Err("Chain id must be greater than 0".to_string());
		}

		if self.confirmation_blocks == 0 {
			return Err("Confirmation blocks must be greater than 0".to_string());
		}

		if self.confirmation_timeout_ms == Some(0) {
			return Err("Confirmation timeout must be greater than 0".to_string());
		}

		Ok(())
	}
}
