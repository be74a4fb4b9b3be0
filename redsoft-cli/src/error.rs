// Copyright 2026, Redsoft
// For licensing, see https://github.com/redsoft/redsoft-contracts/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type RedsoftCliResult = Result<(), RedsoftCliError>;

#[derive(Debug)]
pub struct RedsoftCliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl RedsoftCliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for RedsoftCliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for RedsoftCliError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for RedsoftCliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<redsoft_tools::Error> for RedsoftCliError {
    fn from(err: redsoft_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<redsoft_tools::core::network::NetworkError> for RedsoftCliError {
    fn from(err: redsoft_tools::core::network::NetworkError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<redsoft_tools::core::artifact::ArtifactError> for RedsoftCliError {
    fn from(err: redsoft_tools::core::artifact::ArtifactError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<redsoft_tools::core::build::BuildError> for RedsoftCliError {
    fn from(err: redsoft_tools::core::build::BuildError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<redsoft_tools::core::deployment::DeploymentError> for RedsoftCliError {
    fn from(err: redsoft_tools::core::deployment::DeploymentError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
