//! Network configuration repository.
//!
//! Loads every network from the networks directory once and serves lookups by
//! slug.

use std::{collections::HashMap, path::Path};

use crate::{
	models::{ConfigLoader, Network},
	repositories::error::RepositoryError,
};

pub struct NetworkRepository {
	pub networks: HashMap<String, Network>,
}

impl NetworkRepository {
	pub fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let networks = Network::load_all(path)
			.map_err(|e| RepositoryError::load_error(format!("Failed to load networks: {}", e)))?;
		Ok(NetworkRepository { networks })
	}
}

pub trait NetworkRepositoryTrait {
	fn get(&self, slug: &str) -> Option<Network>;
	fn get_all(&self) -> HashMap<String, Network>;
}

impl NetworkRepositoryTrait for NetworkRepository {
	fn get(&self, slug: &str) -> Option<Network> {
		self.networks.get(slug).cloned()
	}

	fn get_all(&self) -> HashMap<String, Network> {
		self.networks.clone()
	}
}

pub struct NetworkService<T: NetworkRepositoryTrait> {
	repository: T,
}

impl<T: NetworkRepositoryTrait> NetworkService<T> {
	pub fn new_with_repository(repository: T) -> Self {
		NetworkService { repository }
	}

	pub fn get(&self, slug: &str) -> Option<Network> {
		self.repository.get(slug)
	}

	/// Looks up a network, failing with the list of known slugs when missing
	pub fn resolve(&self, slug: &str) -> Result<Network, RepositoryError> {
		self.get(slug).ok_or_else(|| {
			let mut known: Vec<String> = self.repository.get_all().into_keys().collect();
			known.sort();
			RepositoryError::not_found(format!(
				"network '{}' (available: {})",
				slug,
				if known.is_empty() {
					"none".to_string()
				} else {
					known.join(", ")
				}
			))
		})
	}
}

impl NetworkService<NetworkRepository> {
	pub fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let repository = NetworkRepository::new(path)?;
		Ok(NetworkService { repository })
	}
}
