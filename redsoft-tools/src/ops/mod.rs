// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

pub use build::build;
pub use deploy::{deploy, DeployConfig};
pub use export_abi::export_abi;

mod build;
mod deploy;
mod export_abi;
