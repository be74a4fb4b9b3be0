// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use redsoft_tools::ops;

use crate::{
    common_args::ProjectArgs, constants::DEFAULT_CONTRACT, error::RedsoftCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// The contract whose ABI to export.
    #[arg(long, default_value = DEFAULT_CONTRACT)]
    contract: String,
    /// The output file (defaults to stdout).
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> RedsoftCliResult {
    ops::export_abi(&args.project.artifacts_dir, &args.contract, args.output)?;
    Ok(())
}
