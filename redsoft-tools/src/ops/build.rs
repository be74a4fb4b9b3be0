// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

//! Compile the marketplace contracts into deployable artifacts.

use crate::core::build::{compile, solidity_sources, BuildConfig};
use crate::utils::create_dir_if_dne;

/// Compiles every Solidity source and writes one artifact per contract.
///
/// Returns the names of the compiled contracts.
pub fn build(config: &BuildConfig) -> crate::Result<Vec<String>> {
    let sources = solidity_sources(&config.sources_dir)?;
    log::debug!("compiling {} source file(s)", sources.len());

    let artifacts = compile(&sources, config.optimize)?;
    create_dir_if_dne(&config.artifacts_dir)?;

    let mut names = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        let path = artifact.write(&config.artifacts_dir)?;
        log::info!("compiled {} -> {}", artifact.contract_name, path.display());
        names.push(artifact.contract_name.clone());
    }
    Ok(names)
}
