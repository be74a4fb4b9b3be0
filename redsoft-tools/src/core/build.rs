// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

//! Compile the Solidity sources with `solc`.
//!
//! Assumes a `solc` binary is locally available.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

use super::artifact::ContractArtifact;
use crate::utils::command_exists;

const SOLC_INSTALL_LINK: &str = "https://docs.soliditylang.org/en/latest/installing-solidity.html";

/// Where to find sources and where to put artifacts.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub sources_dir: PathBuf,
    pub artifacts_dir: PathBuf,
    pub optimize: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            sources_dir: PathBuf::from("contracts"),
            artifacts_dir: PathBuf::from("artifacts"),
            optimize: false,
        }
    }
}

/// Collects the `.sol` files under the sources directory, sorted by name.
pub fn solidity_sources(sources_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let mut sources: Vec<PathBuf> = fs::read_dir(sources_dir)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "sol").then_some(path)
        })
        .collect();
    if sources.is_empty() {
        return Err(BuildError::NoSources {
            dir: sources_dir.to_path_buf(),
        });
    }
    sources.sort();
    Ok(sources)
}

/// Compiles the given sources, returning one artifact per contract.
pub fn compile(sources: &[PathBuf], optimize: bool) -> Result<Vec<ContractArtifact>, BuildError> {
    if !command_exists("solc") {
        return Err(BuildError::SolcNotFound);
    }

    let mut cmd = Command::new("solc");
    cmd.arg("--combined-json");
    cmd.arg("abi,bin");
    if optimize {
        cmd.arg("--optimize");
    }
    cmd.args(sources);

    let output = cmd.output()?;
    if !output.status.success() {
        return Err(BuildError::Solc {
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    parse_combined_output(&String::from_utf8_lossy(&output.stdout))
}

#[derive(Deserialize)]
struct CombinedOutput {
    contracts: std::collections::BTreeMap<String, CombinedContract>,
}

#[derive(Deserialize)]
struct CombinedContract {
    abi: JsonAbi,
    /// Creation bytecode, hex without a `0x` prefix.
    bin: String,
}

fn parse_combined_output(raw: &str) -> Result<Vec<ContractArtifact>, BuildError> {
    let combined: CombinedOutput = serde_json::from_str(raw)?;
    combined
        .contracts
        .into_iter()
        .map(|(key, contract)| {
            // Keys are of the form `contracts/Redsoft.sol:RedsoftContract`.
            let name = key.rsplit(':').next().unwrap_or(&key).to_string();
            let bytecode = Bytes::from(hex::decode(&contract.bin)?);
            Ok(ContractArtifact {
                contract_name: name,
                abi: contract.abi,
                bytecode,
            })
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("solc not found. Please see\n{SOLC_INSTALL_LINK}")]
    SolcNotFound,
    #[error("no Solidity sources under {dir}")]
    NoSources { dir: PathBuf },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("solc failed (exit code: {exit_code:?})\n{stderr}")]
    Solc {
        exit_code: Option<i32>,
        stderr: String,
    },
    #[error("error parsing solc output: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("error decoding bytecode: {0}")]
    Bytecode(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_solc_combined_json() {
        let raw = r#"{
            "contracts": {
                "contracts/Redsoft.sol:RedsoftContract": {
                    "abi": [{
                        "type": "function",
                        "name": "totalListings",
                        "inputs": [],
                        "outputs": [{"name": "", "type": "uint256", "internalType": "uint256"}],
                        "stateMutability": "view"
                    }],
                    "bin": "60006000f3"
                },
                "contracts/Redsoft.sol:IMarketplace": {
                    "abi": [],
                    "bin": ""
                }
            },
            "version": "0.8.18+commit.87f61d96"
        }"#;

        let artifacts = parse_combined_output(raw).unwrap();
        assert_eq!(artifacts.len(), 2);

        let interface = &artifacts[0];
        assert_eq!(interface.contract_name, "IMarketplace");
        assert!(interface.bytecode.is_empty());

        let marketplace = &artifacts[1];
        assert_eq!(marketplace.contract_name, "RedsoftContract");
        assert_eq!(marketplace.abi.functions().count(), 1);
        assert_eq!(marketplace.bytecode.as_ref(), [0x60, 0x00, 0x60, 0x00, 0xf3]);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_combined_output("warning: pragma"),
            Err(BuildError::Parse(_))
        ));
    }

    #[test]
    fn sources_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "not solidity").unwrap();
        assert!(matches!(
            solidity_sources(dir.path()),
            Err(BuildError::NoSources { .. })
        ));

        fs::write(dir.path().join("Redsoft.sol"), "pragma solidity ^0.8.18;").unwrap();
        let sources = solidity_sources(dir.path()).unwrap();
        assert_eq!(sources.len(), 1);
    }
}
