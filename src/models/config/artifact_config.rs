use std::path::{Path, PathBuf};

use crate::models::{ConfigLoader, ContractArtifact};

use super::error::ConfigError;

const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Directories under the artifacts root that never hold contract artifacts
const IGNORED_DIRS: [&str; 2] = ["build-info", "cache"];

fn is_candidate(root: &Path, path: &Path) -> bool {
	let is_debug_file = path
		.file_name()
		.map(|name| name.to_string_lossy().ends_with(".dbg.json"))
		.unwrap_or(false);

	let relative = path.strip_prefix(root).unwrap_or(path);
	let in_ignored_dir = relative.components().any(|component| {
		IGNORED_DIRS
			.iter()
			.any(|ignored| component.as_os_str() == *ignored)
	});

	!is_debug_file && !in_ignored_dir && ContractArtifact::is_json_file(path)
}

/// Lists artifact files under `root`, optionally restricted to one file stem
pub(crate) fn artifact_paths(root: &Path, stem: Option<&str>) -> Result<Vec<PathBuf>, ConfigError> {
	let file_pattern = match stem {
		Some(stem) => format!("{}.json", glob::Pattern::escape(stem)),
		None => "*.json".to_string(),
	};
	let pattern = format!(
		"{}/**/{}",
		glob::Pattern::escape(&root.to_string_lossy()),
		file_pattern
	);

	let mut paths = glob::glob(&pattern)?
		.filter_map(|entry| entry.ok())
		.filter(|path| is_candidate(root, path))
		.collect::<Vec<_>>();
	paths.sort();

	Ok(paths)
}

impl ConfigLoader for ContractArtifact {
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let artifacts_dir = path.unwrap_or(Path::new(DEFAULT_ARTIFACTS_DIR));

		if !artifacts_dir.exists() {
			return Err(ConfigError::file_error(format!(
				"artifacts directory not found: {}. Compile the contracts first",
				artifacts_dir.display()
			)));
		}

		let mut pairs = Vec::new();
		for path in artifact_paths(artifacts_dir, None)? {
			match Self::load_from_path(&path) {
				Ok(artifact) => pairs.push((artifact.contract_name.clone(), artifact)),
				Err(e) => {
					tracing::debug!(path = %path.display(), error = %e, "Skipping artifact");
				}
			}
		}

		Ok(T::from_iter(pairs))
	}

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let artifact: ContractArtifact = serde_json::from_reader(std::io::BufReader::new(file))?;

		if let Err(validation_error) = artifact.validate() {
			return Err(ConfigError::validation_error(validation_error));
		}

		Ok(artifact)
	}

	fn validate(&self) -> Result<(), String> {
		if self.contract_name.trim().is_empty() {
			return Err("Artifact has no contract name".to_string());
		}

		if !self.is_deployable() {
			return Err(format!(
				"{} has no bytecode. Abstract contracts and interfaces cannot be deployed",
				self.contract_name
			));
		}

		if self.has_constructor_inputs() {
			return Err(format!(
				"{} requires constructor arguments, which are not supported",
				self.contract_name
			));
		}

		Ok(())
	}
}
