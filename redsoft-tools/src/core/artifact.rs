// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! One JSON file per contract under the artifacts directory, written by
//! `redsoft build` and read back at deploy time. The field names follow the
//! solc/hardhat artifact convention so artifacts produced by either toolchain
//! load interchangeably.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::{Deserialize, Serialize};

/// A contract compiled and ready for deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    /// Creation bytecode, hex-encoded on disk.
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Loads the artifact for `name` from the artifacts directory.
    ///
    /// Fails if the contract has not been compiled, or compiled to nothing
    /// deployable (an interface or abstract contract).
    pub fn load(artifacts_dir: &Path, name: &str) -> Result<Self, ArtifactError> {
        let path = Self::path(artifacts_dir, name);
        if !path.exists() {
            return Err(ArtifactError::NotFound {
                name: name.to_string(),
                path,
            });
        }
        let raw = fs::read_to_string(&path)?;
        let artifact: ContractArtifact = serde_json::from_str(&raw).map_err(|source| {
            ArtifactError::Parse {
                name: name.to_string(),
                source,
            }
        })?;
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::NoBytecode {
                name: name.to_string(),
            });
        }
        Ok(artifact)
    }

    /// Writes the artifact into the artifacts directory.
    pub fn write(&self, artifacts_dir: &Path) -> Result<PathBuf, ArtifactError> {
        let path = Self::path(artifacts_dir, &self.contract_name);
        let raw = serde_json::to_string_pretty(self).map_err(|source| ArtifactError::Parse {
            name: self.contract_name.clone(),
            source,
        })?;
        fs::write(&path, raw)?;
        Ok(path)
    }

    fn path(artifacts_dir: &Path, name: &str) -> PathBuf {
        artifacts_dir.join(format!("{name}.json"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("contract {name} has not been compiled (no artifact at {path}). Run `redsoft build` first")]
    NotFound { name: String, path: PathBuf },
    #[error("io error reading artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed artifact for {name}: {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },
    #[error("artifact for {name} has no creation bytecode")]
    NoBytecode { name: String },
}
