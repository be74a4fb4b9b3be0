// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

//! Named profiles for the networks the marketplace deploys to.
//!
//! A profile carries only non-secret connection parameters. The deployer key
//! is referenced by environment variable name and resolved at run time, so no
//! credential ever lives in the table itself.

use std::env;

use alloy::{
    network::EthereumWallet,
    primitives::B256,
    signers::{local::PrivateKeySigner, Signer},
};

use crate::utils::decode0x;

/// Connection parameters for one deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    /// Name the profile is selected by on the command line.
    pub name: &'static str,
    /// Chain id the deployment transaction is signed for.
    pub chain_id: u64,
    /// JSON-RPC endpoint of a node on the network.
    pub endpoint: &'static str,
    /// Environment variable holding the deployer's hex-encoded private key.
    pub key_env: &'static str,
}

/// Networks known to the deploy tooling.
pub const PROFILES: &[NetworkProfile] = &[
    NetworkProfile {
        name: "localhost",
        chain_id: 1337,
        endpoint: "http://localhost:8545",
        key_env: "REDSOFT_DEV_PRIVATE_KEY",
    },
    NetworkProfile {
        name: "amoy",
        chain_id: 80002,
        endpoint: "https://rpc-amoy.polygon.technology",
        key_env: "REDSOFT_AMOY_PRIVATE_KEY",
    },
];

impl NetworkProfile {
    /// Looks up a profile by name.
    pub fn resolve(name: &str) -> Result<&'static NetworkProfile, NetworkError> {
        PROFILES
            .iter()
            .find(|profile| profile.name == name)
            .ok_or_else(|| NetworkError::Unknown(name.to_string()))
    }

    /// Builds the deployer wallet from the profile's key environment variable.
    ///
    /// The signer is bound to the profile's chain id.
    pub fn wallet(&self) -> Result<EthereumWallet, NetworkError> {
        let raw = env::var(self.key_env).map_err(|_| NetworkError::MissingCredentials {
            network: self.name,
            key_env: self.key_env,
        })?;
        if raw.trim().is_empty() {
            return Err(NetworkError::MissingCredentials {
                network: self.name,
                key_env: self.key_env,
            });
        }

        let key = decode0x(&raw).map_err(|e| NetworkError::InvalidKey(e.to_string()))?;
        if key.len() != 32 {
            return Err(NetworkError::InvalidKey(format!(
                "expected a 32 byte key, got {} bytes",
                key.len()
            )));
        }
        let signer = PrivateKeySigner::from_bytes(&B256::from_slice(&key))
            .map_err(|e| NetworkError::InvalidKey(e.to_string()))?
            .with_chain_id(Some(self.chain_id));
        Ok(EthereumWallet::new(signer))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("unknown network: {0}. Run `redsoft networks` to list the known profiles")]
    Unknown(String),
    #[error("no deployer key for {network}: set {key_env} to a hex-encoded private key")]
    MissingCredentials {
        network: &'static str,
        key_env: &'static str,
    },
    #[error("invalid deployer key: {0}")]
    InvalidKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn resolve_known_profiles() {
        let localhost = NetworkProfile::resolve("localhost").unwrap();
        assert_eq!(localhost.chain_id, 1337);

        let amoy = NetworkProfile::resolve("amoy").unwrap();
        assert_eq!(amoy.chain_id, 80002);
    }

    #[test]
    fn resolve_unknown_profile() {
        let err = NetworkProfile::resolve("moonbase").unwrap_err();
        assert!(matches!(err, NetworkError::Unknown(name) if name == "moonbase"));
    }

    #[test]
    fn wallet_requires_key_env() {
        let profile = NetworkProfile {
            name: "unset",
            chain_id: 1,
            endpoint: "http://localhost:8545",
            key_env: "REDSOFT_TEST_UNSET_KEY",
        };
        env::remove_var(profile.key_env);
        let err = profile.wallet().unwrap_err();
        assert!(matches!(err, NetworkError::MissingCredentials { .. }));
    }

    #[test]
    fn wallet_from_env_key() {
        let profile = NetworkProfile {
            name: "dev",
            chain_id: 1337,
            endpoint: "http://localhost:8545",
            key_env: "REDSOFT_TEST_VALID_KEY",
        };
        env::set_var(profile.key_env, format!("0x{TEST_KEY}"));
        profile.wallet().expect("well-formed key should build a wallet");
    }

    #[test]
    fn wallet_rejects_malformed_key() {
        let profile = NetworkProfile {
            name: "dev",
            chain_id: 1337,
            endpoint: "http://localhost:8545",
            key_env: "REDSOFT_TEST_BAD_KEY",
        };
        env::set_var(profile.key_env, "0xdeadbeef");
        let err = profile.wallet().unwrap_err();
        assert!(matches!(err, NetworkError::InvalidKey(_)));
    }
}
