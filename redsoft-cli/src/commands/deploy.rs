// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use redsoft_tools::ops::{self, DeployConfig};

use crate::{
    common_args::{AuthArgs, NetworkArgs, ProjectArgs},
    constants::{DEFAULT_CONTRACT, DEFAULT_RECORD_FILE},
    error::RedsoftCliResult,
    utils::convert_gwei_to_wei,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// The contract to deploy.
    #[arg(long, default_value = DEFAULT_CONTRACT)]
    contract: String,
    /// Where to write the deployment record. Overwritten on every deployment.
    #[arg(long, default_value = DEFAULT_RECORD_FILE)]
    output: PathBuf,
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    project: ProjectArgs,
}

pub async fn exec(args: Args) -> RedsoftCliResult {
    let profile = args.network.profile()?;
    let wallet = args.auth.build_wallet(profile)?;

    let max_fee_per_gas_wei = args
        .max_fee_per_gas_gwei
        .as_deref()
        .map(convert_gwei_to_wei)
        .transpose()?;

    let config = DeployConfig {
        artifacts_dir: args.project.artifacts_dir,
        record_path: args.output,
        max_fee_per_gas_wei,
        estimate_gas: args.estimate_gas,
    };
    ops::deploy(&args.contract, profile, wallet, &config).await?;
    Ok(())
}
