// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

pub mod artifact;
pub mod build;
pub mod deployment;
pub mod network;
pub mod record;
