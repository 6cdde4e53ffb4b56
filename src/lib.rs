//! Contract lifecycle client for the `RWAAsset` smart contract.
//!
//! Deploys the compiled contract to a configured network and calls its
//! `createAsset` / `getAsset` functions over JSON-RPC.
//!
//! - `bootstrap`: wiring between configuration and services
//! - `models`: networks, artifacts, contract references and results
//! - `repositories`: loading networks and artifacts from disk
//! - `services`: RPC client, deployer and interactor
//! - `utils`: logging, parsing and defaults

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
