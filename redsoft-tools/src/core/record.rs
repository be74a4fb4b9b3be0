// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

//! The record written after a successful deployment.

use std::{fs, path::Path};

use alloy::{json_abi::JsonAbi, primitives::Address};
use serde::{Deserialize, Serialize};

/// Address and ABI of a deployed contract.
///
/// This is the document the marketplace frontend consumes: a single JSON
/// object with exactly these two fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub address: Address,
    pub abi: JsonAbi,
}

impl DeploymentRecord {
    pub fn new(address: Address, abi: JsonAbi) -> Self {
        Self { address, abi }
    }

    /// Writes the record to `path`, replacing any previous record.
    pub fn write(&self, path: &Path) -> Result<(), RecordError> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw).map_err(RecordError::Write)
    }

    pub fn read(path: &Path) -> Result<Self, RecordError> {
        let raw = fs::read_to_string(path).map_err(RecordError::Read)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("error writing deployment record: {0}")]
    Write(std::io::Error),
    #[error("error reading deployment record: {0}")]
    Read(std::io::Error),
    #[error("error encoding deployment record: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    fn listings_abi() -> JsonAbi {
        serde_json::from_str(
            r#"[{
                "type": "function",
                "name": "totalListings",
                "inputs": [],
                "outputs": [{"name": "", "type": "uint256", "internalType": "uint256"}],
                "stateMutability": "view"
            }]"#,
        )
        .unwrap()
    }

    #[test]
    fn round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Marketplace.json");

        let record = DeploymentRecord::new(
            address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"),
            listings_abi(),
        );
        record.write(&path).unwrap();

        let read_back = DeploymentRecord::read(&path).unwrap();
        assert_eq!(read_back, record);
    }

    #[test]
    fn file_has_exactly_address_and_abi() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Marketplace.json");

        let record = DeploymentRecord::new(Address::ZERO, listings_abi());
        record.write(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("address"));
        assert!(object.contains_key("abi"));

        // The address field is a plain hex string, the ABI a structured array.
        let addr = object["address"].as_str().unwrap();
        assert!(addr.starts_with("0x"));
        assert_eq!(addr.len(), 42);
        assert!(object["abi"].is_array());
    }

    #[test]
    fn rewrite_replaces_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Marketplace.json");

        let first = DeploymentRecord::new(
            address!("0000000000000000000000000000000000000001"),
            listings_abi(),
        );
        first.write(&path).unwrap();

        let second = DeploymentRecord::new(
            address!("0000000000000000000000000000000000000002"),
            listings_abi(),
        );
        second.write(&path).unwrap();

        let read_back = DeploymentRecord::read(&path).unwrap();
        assert_eq!(read_back.address, second.address);
    }
}
