// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

use crate::error::RedsoftCliResult;

mod build;
mod deploy;
mod export_abi;
mod networks;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Compile the marketplace contracts
    #[clap(visible_alias = "b")]
    Build(build::Args),
    /// Deploy a marketplace contract and record its address and ABI
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Export a contract's JSON ABI
    ExportAbi(export_abi::Args),
    /// List the known network profiles
    Networks(networks::Args),
}

pub async fn exec(cmd: Command) -> RedsoftCliResult {
    match cmd {
        Command::Build(args) => build::exec(args),
        Command::Deploy(args) => deploy::exec(args).await,
        Command::ExportAbi(args) => export_abi::exec(args),
        Command::Networks(args) => networks::exec(args),
    }
}
