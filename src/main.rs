//! Contract lifecycle client entry point.
//!
//! This binary deploys the `RWAAsset` contract and calls it on a configured
//! network.
//!
//! # Commands
//! - `deploy`: Deploys a compiled contract and prints its address
//! - `create-asset`: Calls `createAsset` and prints the transaction hash
//! - `get-asset`: Reads an asset with `getAsset`
//!
//! # Flow
//! 1. Loads `.env` and parses the command line
//! 2. Loads the selected network from the networks directory
//! 3. Connects to its RPC endpoint with the configured signer
//! 4. Sends the transaction and waits for confirmation
//! 5. Prints the result, or logs the error. Only a failed deployment exits
//!    with status 1

use alloy::primitives::{Address, U256};
use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use dotenvy::dotenv;
use rwa_asset_client::{
	bootstrap::{
		asset_creation_message, create_deployer, create_interactor, deployment_message,
		load_network,
	},
	models::Network,
	utils::{
		logging::setup_logging,
		parsing::{parse_address, parse_u256},
		CONTRACT_ADDRESS_ENV, DEFAULT_ASSET_METADATA, DEFAULT_ASSET_VALUE, DEFAULT_CONTRACT_NAME,
		DEFAULT_NETWORK,
	},
};
use std::{
	env::{set_var, var},
	path::PathBuf,
};
use tracing::{error, info, instrument};

fn network_arg() -> Arg {
	Arg::new("network")
		.long("network")
		.help("Network to use, by slug")
		.value_name("NETWORK_SLUG")
		.default_value(DEFAULT_NETWORK)
}

fn address_arg() -> Arg {
	Arg::new("address")
		.long("address")
		.help("Address of the deployed RWAAsset contract")
		.value_name("ADDRESS")
		.env(CONTRACT_ADDRESS_ENV)
		.value_parser(parse_address)
		.required(true)
}

fn build_cli() -> Command {
	Command::new("rwa-asset-client")
		.version(env!("CARGO_PKG_VERSION"))
		.about("Deploys the RWAAsset contract and creates or reads assets on it.")
		.subcommand_required(true)
		.arg_required_else_help(true)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL")
				.global(true),
		)
		.arg(
			Arg::new("config-dir")
				.long("config-dir")
				.help("Directory holding network configurations (default: config/networks)")
				.value_name("PATH")
				.value_parser(clap::value_parser!(PathBuf))
				.global(true),
		)
		.subcommand(
			Command::new("deploy")
				.about("Deploy a compiled contract")
				.arg(network_arg())
				.arg(
					Arg::new("contract")
						.long("contract")
						.help("Name of the compiled contract")
						.value_name("NAME")
						.default_value(DEFAULT_CONTRACT_NAME),
				)
				.arg(
					Arg::new("artifacts")
						.long("artifacts")
						.help("Directory holding compiled artifacts (default: artifacts)")
						.value_name("PATH")
						.value_parser(clap::value_parser!(PathBuf)),
				),
		)
		.subcommand(
			Command::new("create-asset")
				.about("Create an asset on a deployed contract")
				.arg(network_arg())
				.arg(address_arg())
				.arg(
					Arg::new("metadata")
						.long("metadata")
						.help("Asset metadata")
						.value_name("TEXT")
						.default_value(DEFAULT_ASSET_METADATA),
				)
				.arg(
					Arg::new("value")
						.long("value")
						.help("Asset value")
						.value_name("UINT256")
						.value_parser(parse_u256)
						.default_value(DEFAULT_ASSET_VALUE),
				),
		)
		.subcommand(
			Command::new("get-asset")
				.about("Read an asset from a deployed contract")
				.arg(network_arg())
				.arg(address_arg())
				.arg(
					Arg::new("asset-id")
						.long("asset-id")
						.help("Id of the asset")
						.value_name("UINT256")
						.value_parser(parse_u256)
						.required(true),
				),
		)
}

fn resolve_network(matches: &ArgMatches, sub: &ArgMatches) -> anyhow::Result<Network> {
	let config_dir = matches.get_one::<PathBuf>("config-dir");
	let slug = sub
		.get_one::<String>("network")
		.map(String::as_str)
		.unwrap_or(DEFAULT_NETWORK);

	load_network(config_dir.map(PathBuf::as_path), slug)
		.map_err(|e| anyhow::anyhow!("Failed to load network {}: {}", slug, e))
}

#[instrument(skip_all)]
async fn deploy(matches: &ArgMatches, sub: &ArgMatches) -> anyhow::Result<()> {
	let network = resolve_network(matches, sub)?;
	let contract = sub
		.get_one::<String>("contract")
		.map(String::as_str)
		.unwrap_or(DEFAULT_CONTRACT_NAME);
	let artifacts = sub.get_one::<PathBuf>("artifacts");

	info!(network = %network.slug, contract, "Starting deployment");

	let deployer = create_deployer(&network, artifacts.map(PathBuf::as_path))
		.await
		.map_err(|e| anyhow::anyhow!("Failed to prepare deployment: {}", e))?;
	let outcome = deployer
		.deploy(contract)
		.await
		.with_context(|| format!("Failed to deploy {}", contract))?;

	println!("{}", deployment_message(&outcome));
	Ok(())
}

#[instrument(skip_all)]
async fn create_asset(matches: &ArgMatches, sub: &ArgMatches) -> anyhow::Result<()> {
	let network = resolve_network(matches, sub)?;
	let address = *sub
		.get_one::<Address>("address")
		.context("contract address is required")?;
	let metadata = sub
		.get_one::<String>("metadata")
		.map(String::as_str)
		.unwrap_or(DEFAULT_ASSET_METADATA);
	let value = *sub.get_one::<U256>("value").context("value is required")?;

	let interactor = create_interactor(&network, address)
		.await
		.map_err(|e| anyhow::anyhow!("Failed to connect to contract {}: {}", address, e))?;
	let creation = interactor
		.create_asset(metadata, value)
		.await
		.context("Failed to create asset")?;

	println!("{}", asset_creation_message(&creation));
	Ok(())
}

#[instrument(skip_all)]
async fn get_asset(matches: &ArgMatches, sub: &ArgMatches) -> anyhow::Result<()> {
	let network = resolve_network(matches, sub)?;
	let address = *sub
		.get_one::<Address>("address")
		.context("contract address is required")?;
	let asset_id = *sub
		.get_one::<U256>("asset-id")
		.context("asset id is required")?;

	let interactor = create_interactor(&network, address)
		.await
		.map_err(|e| anyhow::anyhow!("Failed to connect to contract {}: {}", address, e))?;
	let asset = interactor
		.get_asset(asset_id)
		.await
		.with_context(|| format!("Failed to read asset {}", asset_id))?;

	println!("Asset {}: {}", asset_id, asset);
	Ok(())
}

/// Main entry point for the contract lifecycle client.
///
/// # Errors
/// Returns an error, and therefore exits with status 1, if a deployment fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// Load environment variables from .env file before `--address` falls back to them
	dotenv().ok();

	let matches = build_cli().get_matches();

	// CLI options only apply if the corresponding environment variables are NOT already set
	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("RUST_LOG").is_err() {
			set_var("RUST_LOG", level);
		}
	}

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let (command, result) = match matches.subcommand() {
		Some(("deploy", sub)) => ("deploy", deploy(&matches, sub).await),
		Some(("create-asset", sub)) => ("create-asset", create_asset(&matches, sub).await),
		Some(("get-asset", sub)) => ("get-asset", get_asset(&matches, sub).await),
		_ => ("unknown", Err(anyhow::anyhow!("Unknown command"))),
	};

	conclude(command, result)
}

/// Commands that call an already deployed contract
fn is_interaction(command: &str) -> bool {
	matches!(command, "create-asset" | "get-asset")
}

/// Logs a failed command and decides how the process ends
///
/// A failed deployment is returned, so the process exits with status 1.
/// A failed interaction is only logged and the process exits with status 0.
fn conclude(command: &str, result: anyhow::Result<()>) -> anyhow::Result<()> {
	let Err(e) = result else {
		return Ok(());
	};

	error!(command, error = %format!("{:#}", e), "Command failed");

	if is_interaction(command) {
		Ok(())
	} else {
		Err(e)
	}
}
