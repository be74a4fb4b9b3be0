// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

use redsoft_tools::core::network::PROFILES;

use crate::error::RedsoftCliResult;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub fn exec(_args: Args) -> RedsoftCliResult {
    for profile in PROFILES {
        println!("{} (chain id {})", profile.name, profile.chain_id);
        println!("  endpoint: {}", profile.endpoint);
        println!("  deployer key env: {}", profile.key_env);
    }
    Ok(())
}
