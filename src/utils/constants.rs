//! Defaults used when a command line option is omitted.

/// Network used when `--network` is not given
pub const DEFAULT_NETWORK: &str = "localhost";

/// Contract deployed when `--contract` is not given
pub const DEFAULT_CONTRACT_NAME: &str = "RWAAsset";

/// Metadata of the asset created when `--metadata` is not given
pub const DEFAULT_ASSET_METADATA: &str = "Gold-backed token";

/// Value of the asset created when `--value` is not given
pub const DEFAULT_ASSET_VALUE: &str = "1000";

/// Environment variable holding the deployed contract address
pub const CONTRACT_ADDRESS_ENV: &str = "RWA_CONTRACT_ADDRESS";
