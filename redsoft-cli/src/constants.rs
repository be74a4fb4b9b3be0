// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

/// The network profile used when none is specified.
pub const DEFAULT_NETWORK: &str = "localhost";

/// The contract deployed when none is specified.
pub const DEFAULT_CONTRACT: &str = "RedsoftContract";

/// The file the deployment record is written to, as read by the frontend.
pub const DEFAULT_RECORD_FILE: &str = "Marketplace.json";

/// Where compiled artifacts live.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Where the Solidity sources live.
pub const DEFAULT_SOURCES_DIR: &str = "contracts";
