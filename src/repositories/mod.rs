//! Repository implementations for loading configuration.
//!
//! - `NetworkRepository`: networks from the networks directory, keyed by slug
//! - `ArtifactRepository`: compiled contract artifacts, resolved by contract name

mod artifact;
mod error;
mod network;

pub use artifact::{ArtifactRepository, ArtifactRepositoryTrait};
pub use error::RepositoryError;
pub use network::{NetworkRepository, NetworkRepositoryTrait, NetworkService};
