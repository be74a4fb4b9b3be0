// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use redsoft_tools::{core::build::BuildConfig, ops};

use crate::{
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_SOURCES_DIR},
    error::RedsoftCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Directory holding the Solidity sources.
    #[arg(long, default_value = DEFAULT_SOURCES_DIR)]
    sources_dir: PathBuf,
    /// Directory the artifacts are written to.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    artifacts_dir: PathBuf,
    /// Enable the solc optimizer.
    #[arg(long)]
    optimize: bool,
}

pub fn exec(args: Args) -> RedsoftCliResult {
    let config = BuildConfig {
        sources_dir: args.sources_dir,
        artifacts_dir: args.artifacts_dir,
        optimize: args.optimize,
    };
    ops::build(&config)?;
    Ok(())
}
