// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use std::path::PathBuf;

use alloy::{
    network::EthereumWallet,
    providers::{ProviderBuilder, WalletProvider},
};

use crate::core::{
    artifact::ContractArtifact,
    deployment::{deployed_address, DeploymentRequest},
    network::NetworkProfile,
    record::DeploymentRecord,
};

#[derive(Debug)]
pub struct DeployConfig {
    pub artifacts_dir: PathBuf,
    /// Where the deployment record lands. Overwritten on every deployment.
    pub record_path: PathBuf,
    pub max_fee_per_gas_wei: Option<u128>,
    /// Only estimate gas, deploying nothing and writing no record.
    pub estimate_gas: bool,
}

/// Deploys `contract_name` to the given network and records the result.
///
/// The artifact is resolved before anything touches the network, so an
/// uncompiled contract fails fast. The record file is only written once the
/// deployment transaction is confirmed; a failure at any earlier point leaves
/// no file behind.
pub async fn deploy(
    contract_name: &str,
    profile: &NetworkProfile,
    wallet: EthereumWallet,
    config: &DeployConfig,
) -> crate::Result<Option<DeploymentRecord>> {
    let artifact = ContractArtifact::load(&config.artifacts_dir, contract_name)?;

    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(profile.endpoint)
        .await?;
    let sender = provider.default_signer_address();
    log::debug!("deploying from sender address: {sender}");

    let request = DeploymentRequest::new(sender, &artifact.bytecode, config.max_fee_per_gas_wei);

    if config.estimate_gas {
        let gas = request.estimate_gas(&provider).await?;
        let gas_price = request.fee_per_gas(&provider).await?;
        log::info!("deployment estimate: {gas} gas at {gas_price} wei per gas");
        return Ok(None);
    }

    let receipt = request.exec(&provider).await?;
    let address = deployed_address(&receipt)?;
    log::debug!("gas used: {}", receipt.gas_used);
    log::debug!("deployment tx hash: {}", receipt.transaction_hash);

    let record = DeploymentRecord::new(address, artifact.abi);
    record.write(&config.record_path)?;

    log::info!("deployed {contract_name} on {} at: {address}", profile.name);
    Ok(Some(record))
}
