//! Contract lifecycle services.
//!
//! - `ContractDeployer`: deploys a compiled contract and reports its address
//! - `AssetInteractor`: creates and reads assets on a deployed `RWAAsset`

mod deployer;
mod error;
mod interactor;

pub use deployer::ContractDeployer;
pub use error::ContractError;
pub use interactor::AssetInteractor;
