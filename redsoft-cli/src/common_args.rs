// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::B256,
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{ensure, Context};
use redsoft_tools::{core::network::NetworkProfile, utils::decode0x};

use crate::constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_NETWORK};

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network profile to deploy to.
    #[arg(short, long, default_value = DEFAULT_NETWORK)]
    pub network: String,
}

impl NetworkArgs {
    pub fn profile(&self) -> eyre::Result<&'static NetworkProfile> {
        NetworkProfile::resolve(&self.network).map_err(Into::into)
    }
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key.
    /// Defaults to the key referenced by the network profile.
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    /// Builds the deployer wallet, bound to the profile's chain id.
    ///
    /// Key file and keystore take precedence; with neither given, the key is
    /// read from the environment variable the profile names.
    pub fn build_wallet(&self, profile: &NetworkProfile) -> eyre::Result<EthereumWallet> {
        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            let key = decode0x(key)?;
            ensure!(key.len() == 32, "private key file must hold a 32 byte key");
            let signer = PrivateKeySigner::from_bytes(&B256::from_slice(&key))?
                .with_chain_id(Some(profile.chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        if let Some(keystore) = &self.keystore_path {
            let password = self
                .keystore_password_path
                .as_ref()
                .map(fs::read_to_string)
                .unwrap_or(Ok("".into()))?;
            let signer = LocalSigner::decrypt_keystore(keystore, password)?
                .with_chain_id(Some(profile.chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        profile.wallet().map_err(Into::into)
    }
}

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Directory holding compiled contract artifacts.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,
}
