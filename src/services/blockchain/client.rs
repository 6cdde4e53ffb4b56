//! EVM client for deploying and calling the `RWAAsset` contract.
//!
//! Wraps an alloy provider configured for one network. Every write is a single
//! linear sequence: broadcast the transaction, then poll for its receipt until
//! it is deep enough.

use std::time::Duration;

use alloy::{
	network::{EthereumWallet, TransactionBuilder},
	primitives::{Address, Bytes, TxHash, U256},
	providers::{DynProvider, Provider, ProviderBuilder},
	rpc::types::{TransactionReceipt, TransactionRequest},
};
use async_trait::async_trait;
use url::Url;

use crate::{
	models::{Asset, Network, TransactionOutcome},
	services::blockchain::{bindings::RWAAsset, signer::resolve_signer, BlockChainError},
};

/// Operations the contract services need from the chain
#[async_trait]
pub trait EvmContractClientTrait: Send + Sync {
	/// Address transactions are sent from
	fn sender(&self) -> Address;

	/// Chain id reported by the node
	async fn chain_id(&self) -> Result<u64, BlockChainError>;

	/// Sends a contract creation transaction and waits for its receipt
	async fn deploy_contract(&self, bytecode: Bytes) -> Result<TransactionOutcome, BlockChainError>;

	/// Runs `createAsset` as a call against the latest state and returns the id it would assign
	async fn simulate_create_asset(
		&self,
		contract: Address,
		metadata: String,
		value: U256,
	) -> Result<U256, BlockChainError>;

	/// Sends `createAsset` and waits for its receipt
	async fn create_asset(
		&self,
		contract: Address,
		metadata: String,
		value: U256,
	) -> Result<TransactionOutcome, BlockChainError>;

	/// Reads an asset with `getAsset`
	async fn get_asset(&self, contract: Address, asset_id: U256) -> Result<Asset, BlockChainError>;
}

/// Client backed by an alloy HTTP provider
#[derive(Clone)]
pub struct EvmContractClient {
	provider: DynProvider,
	sender: Address,
	required_confirmations: u64,
	confirmation_timeout: Option<Duration>,
}

impl EvmContractClient {
	/// Connects to the network's primary RPC endpoint
	///
	/// Installs the configured private key as the wallet, or falls back to the
	/// node's first unlocked account. The node's chain id is checked against the
	/// configured one, which also verifies the endpoint is reachable.
	///
	/// # Errors
	/// * `ConnectionError` - no usable endpoint, unreachable node, or chain id mismatch
	/// * `SignerError` - missing or malformed credential, or no unlocked account
	pub async fn new(network: &Network) -> Result<Self, BlockChainError> {
		let rpc_url = network.primary_rpc_url().ok_or_else(|| {
			BlockChainError::connection_error(format!(
				"No usable RPC URL configured for network {}",
				network.slug
			))
		})?;
		let url = Url::parse(&rpc_url.url).map_err(|e| {
			BlockChainError::connection_error(format!("Invalid RPC URL {}: {}", rpc_url.url, e))
		})?;

		tracing::debug!(
			network = %network.slug,
			url = %rpc_url.url,
			local_signer = network.has_local_signer(),
			"Connecting to RPC endpoint"
		);

		let (provider, local_sender) = match resolve_signer(network)? {
			Some(signer) => {
				let sender = signer.address();
				let provider = ProviderBuilder::new()
					.wallet(EthereumWallet::from(signer))
					.connect_http(url)
					.erased();
				(provider, Some(sender))
			}
			None => (ProviderBuilder::new().connect_http(url).erased(), None),
		};

		Self::connect(network, provider, local_sender).await
	}

	/// Finishes connecting over an already built provider
	///
	/// Verifies the chain id when the network configures one and picks the
	/// sender: `local_sender` when a wallet is installed, otherwise the node's
	/// first unlocked account.
	///
	/// # Errors
	/// * `ConnectionError` - unreachable node or chain id mismatch
	/// * `SignerError` - no local sender and no unlocked account
	pub async fn connect(
		network: &Network,
		provider: DynProvider,
		local_sender: Option<Address>,
	) -> Result<Self, BlockChainError> {
		let chain_id = provider.get_chain_id().await?;
		if let Some(expected) = network.chain_id {
			if chain_id != expected {
				return Err(BlockChainError::connection_error(format!(
					"Chain id mismatch for network {}: expected {}, node reports {}",
					network.slug, expected, chain_id
				)));
			}
		}

		let sender = match local_sender {
			Some(sender) => sender,
			None => node_account(&provider).await?,
		};

		tracing::debug!(network = %network.slug, chain_id, %sender, "Connected to RPC endpoint");

		Ok(Self::new_with_provider(
			provider,
			sender,
			network.confirmation_blocks,
			network.confirmation_timeout(),
		))
	}

	/// Creates a client around an already configured provider
	pub fn new_with_provider(
		provider: DynProvider,
		sender: Address,
		required_confirmations: u64,
		confirmation_timeout: Option<Duration>,
	) -> Self {
		Self {
			provider,
			sender,
			required_confirmations: required_confirmations.max(1),
			confirmation_timeout,
		}
	}

	/// Waits for the receipt of `tx_hash`, bounded by the confirmation timeout
	async fn confirm(&self, tx_hash: TxHash) -> Result<TransactionOutcome, BlockChainError> {
		tracing::info!(
			%tx_hash,
			confirmations = self.required_confirmations,
			"Waiting for transaction confirmation"
		);

		let receipt = match self.confirmation_timeout {
			Some(timeout) => tokio::time::timeout(timeout, self.wait_for_receipt(tx_hash))
				.await
				.map_err(|_| {
					BlockChainError::transaction_error(format!(
						"Transaction {} was not confirmed within {} ms",
						tx_hash,
						timeout.as_millis()
					))
				})??,
			None => self.wait_for_receipt(tx_hash).await?,
		};

		Ok(outcome_from_receipt(&receipt))
	}

	/// Polls until the transaction is mined and `required_confirmations` blocks deep
	async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt, BlockChainError> {
		let poll_interval = self.provider.client().poll_interval();

		loop {
			if let Some(receipt) = self.provider.get_transaction_receipt(tx_hash).await? {
				if let Some(mined_in) = receipt.block_number {
					if self.required_confirmations <= 1 {
						return Ok(receipt);
					}

					let latest = self.provider.get_block_number().await?;
					if latest.saturating_sub(mined_in) + 1 >= self.required_confirmations {
						return Ok(receipt);
					}
				}
			}

			tokio::time::sleep(poll_interval).await;
		}
	}
}

/// First account the node can sign for
async fn node_account(provider: &DynProvider) -> Result<Address, BlockChainError> {
	provider
		.get_accounts()
		.await?
		.into_iter()
		.next()
		.ok_or_else(|| {
			BlockChainError::signer_error(
				"No account configured and the node exposes no unlocked accounts",
			)
		})
}

fn outcome_from_receipt(receipt: &TransactionReceipt) -> TransactionOutcome {
	TransactionOutcome {
		transaction_hash: receipt.transaction_hash,
		block_number: receipt.block_number,
		gas_used: receipt.gas_used,
		status: receipt.status(),
		contract_address: receipt.contract_address,
	}
}

#[async_trait]
impl EvmContractClientTrait for EvmContractClient {
	fn sender(&self) -> Address {
		self.sender
	}

	async fn chain_id(&self) -> Result<u64, BlockChainError> {
		Ok(self.provider.get_chain_id().await?)
	}

	async fn deploy_contract(&self, bytecode: Bytes) -> Result<TransactionOutcome, BlockChainError> {
		let tx = TransactionRequest::default()
			.with_from(self.sender)
			.with_deploy_code(bytecode);

		let pending = self.provider.send_transaction(tx).await?;
		self.confirm(*pending.tx_hash()).await
	}

	async fn simulate_create_asset(
		&self,
		contract: Address,
		metadata: String,
		value: U256,
	) -> Result<U256, BlockChainError> {
		let instance = RWAAsset::new(contract, self.provider.clone());
		let asset_id = instance
			.createAsset(metadata, value)
			.from(self.sender)
			.call()
			.await?;
		Ok(asset_id)
	}

	async fn create_asset(
		&self,
		contract: Address,
		metadata: String,
		value: U256,
	) -> Result<TransactionOutcome, BlockChainError> {
		let instance = RWAAsset::new(contract, self.provider.clone());
		let pending = instance
			.createAsset(metadata, value)
			.from(self.sender)
			.send()
			.await?;
		self.confirm(*pending.tx_hash()).await
	}

	async fn get_asset(&self, contract: Address, asset_id: U256) -> Result<Asset, BlockChainError> {
		let instance = RWAAsset::new(contract, self.provider.clone());
		let asset = instance.getAsset(asset_id).call().await?;
		Ok(Asset {
			metadata: asset._0,
			value: asset._1,
			owner: asset._2,
		})
	}
}
