// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

//! Export a contract's ABI from its compiled artifact.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::artifact::ContractArtifact;
use crate::utils::file_or_stdout;

/// Writes the JSON ABI for `contract_name` to `output`, or stdout.
pub fn export_abi(
    artifacts_dir: &Path,
    contract_name: &str,
    output: Option<PathBuf>,
) -> crate::Result<()> {
    let artifact = ContractArtifact::load(artifacts_dir, contract_name)?;
    let mut out = file_or_stdout(output)?;
    serde_json::to_writer_pretty(&mut out, &artifact.abi)?;
    writeln!(out)?;
    Ok(())
}
