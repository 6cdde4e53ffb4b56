use mockall::mock;

use rwa_asset_client::{
	models::ContractArtifact,
	repositories::{ArtifactRepositoryTrait, RepositoryError},
};

mock! {
	pub ArtifactRepository {}

	impl ArtifactRepositoryTrait for ArtifactRepository {
		fn resolve(&self, contract_name: &str) -> Result<ContractArtifact, RepositoryError>;
	}
}
