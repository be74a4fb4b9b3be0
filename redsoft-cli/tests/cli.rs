// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

//! End-to-end tests of the `redsoft` binary that run without a node.

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;

/// First pre-funded anvil/hardhat development account.
const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn redsoft() -> Command {
    Command::cargo_bin("redsoft").unwrap()
}

#[test]
fn deploy_rejects_unknown_network() {
    let tmp = tempfile::tempdir().unwrap();
    redsoft()
        .current_dir(tmp.path())
        .args(["deploy", "--network", "moonbase"])
        .assert()
        .failure()
        .stderr(contains("unknown network"));

    // A failed run must not leave a record behind.
    assert!(!tmp.path().join("Marketplace.json").exists());
}

#[test]
fn deploy_requires_a_compiled_artifact() {
    let tmp = tempfile::tempdir().unwrap();
    redsoft()
        .current_dir(tmp.path())
        .env("REDSOFT_DEV_PRIVATE_KEY", DEV_KEY)
        .args(["deploy", "--network", "localhost", "--artifacts-dir", "."])
        .assert()
        .failure()
        .stderr(contains("has not been compiled"));

    assert!(!tmp.path().join("Marketplace.json").exists());
}

#[test]
fn deploy_requires_credentials() {
    let tmp = tempfile::tempdir().unwrap();
    redsoft()
        .current_dir(tmp.path())
        .env_remove("REDSOFT_DEV_PRIVATE_KEY")
        .args(["deploy", "--network", "localhost"])
        .assert()
        .failure()
        .stderr(contains("REDSOFT_DEV_PRIVATE_KEY"));
}

#[test]
fn networks_lists_known_profiles() {
    redsoft()
        .arg("networks")
        .assert()
        .success()
        .stdout(contains("localhost"))
        .stdout(contains("amoy"));
}

#[test]
fn export_abi_prints_artifact_abi() {
    let tmp = tempfile::tempdir().unwrap();
    let artifact = serde_json::json!({
        "contractName": "RedsoftContract",
        "abi": [{
            "type": "function",
            "name": "totalListings",
            "inputs": [],
            "outputs": [{"name": "", "type": "uint256", "internalType": "uint256"}],
            "stateMutability": "view"
        }],
        "bytecode": "0x60006000f3",
    });
    fs::write(
        tmp.path().join("RedsoftContract.json"),
        artifact.to_string(),
    )
    .unwrap();

    redsoft()
        .current_dir(tmp.path())
        .args(["export-abi", "--artifacts-dir", "."])
        .assert()
        .success()
        .stdout(contains("totalListings"));
}
