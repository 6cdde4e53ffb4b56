//! Contract artifact repository.
//!
//! Resolves a compiled contract by name from the artifacts directory produced by
//! the Solidity toolchain.

use std::{
	collections::BTreeMap,
	path::{Path, PathBuf},
};

use crate::{
	models::{artifact_paths, ConfigLoader, ContractArtifact},
	repositories::error::RepositoryError,
};

/// Resolves compiled contracts by name
pub trait ArtifactRepositoryTrait: Send + Sync {
	fn resolve(&self, contract_name: &str) -> Result<ContractArtifact, RepositoryError>;
}

/// Artifacts stored on disk in the Hardhat layout
/// (`<root>/<source path>/<Name>.sol/<Name>.json`)
#[derive(Debug, Clone)]
pub struct ArtifactRepository {
	root: PathBuf,
}

impl ArtifactRepository {
	pub fn new(root: Option<&Path>) -> Result<Self, RepositoryError> {
		let root = root
			.map(Path::to_path_buf)
			.unwrap_or_else(|| PathBuf::from("artifacts"));

		if !root.is_dir() {
			return Err(RepositoryError::load_error(format!(
				"artifacts directory not found: {}. Compile the contracts first",
				root.display()
			)));
		}

		Ok(Self { root })
	}
}

impl ArtifactRepositoryTrait for ArtifactRepository {
	fn resolve(&self, contract_name: &str) -> Result<ContractArtifact, RepositoryError> {
		let candidates = artifact_paths(&self.root, Some(contract_name))
			.map_err(|e| RepositoryError::load_error(e.to_string()))?;

		// A file with the right name can still be unusable (an abstract
		// contract in another source directory); it only matters when nothing
		// else matches.
		let mut matches = Vec::new();
		let mut rejected = None;
		for path in candidates {
			match ContractArtifact::load_from_path(&path) {
				Ok(artifact) if artifact.contract_name == contract_name => {
					matches.push((path, artifact));
				}
				Ok(_) => {}
				Err(e) => {
					tracing::debug!(path = %path.display(), error = %e, "Skipping artifact");
					rejected.get_or_insert(e);
				}
			}
		}

		match matches.len() {
			0 => {
				if let Some(e) = rejected {
					return Err(e.into());
				}

				let available: BTreeMap<String, ContractArtifact> =
					ContractArtifact::load_all(Some(&self.root)).unwrap_or_default();
				let available: Vec<&str> = available.keys().map(String::as_str).collect();
				Err(RepositoryError::not_found(format!(
					"artifact for contract '{}' in {} (available: {})",
					contract_name,
					self.root.display(),
					if available.is_empty() {
						"none".to_string()
					} else {
						available.join(", ")
					}
				)))
			}
			1 => {
				let (path, artifact) = matches.remove(0);
				tracing::debug!(
					contract = contract_name,
					path = %path.display(),
					"Resolved contract artifact"
				);
				Ok(artifact)
			}
			_ => {
				let sources: Vec<String> = matches
					.iter()
					.map(|(_, artifact)| {
						artifact
							.source_name
							.clone()
							.unwrap_or_else(|| "<unknown source>".to_string())
					})
					.collect();
				Err(RepositoryError::validation_error(format!(
					"multiple artifacts for contract '{}': {}. Use a unique contract name",
					contract_name,
					sources.join(", ")
				)))
			}
		}
	}
}
