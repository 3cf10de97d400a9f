use std::path::PathBuf;

use thiserror::Error;

use crate::backend::deployment::DeploymentError;
use crate::backend::station::StationBuildError;

use super::config::GeneralConfig;
use super::report::{Reporter, ReportError};


use custom::custom;
use premade::premade;
use random::{random, RandomDeploymentError};


mod custom;
mod premade;
mod random;


#[derive(Error, Debug)]
pub enum ExampleError {
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
    #[error(transparent)]
    Random(#[from] RandomDeploymentError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("Invalid premade station: {0}")]
    Station(#[from] StationBuildError),
}


#[derive(Clone, Debug, PartialEq)]
pub enum Example {
    Custom(PathBuf),
    Premade,
    Random,
}

impl Example {
    /// # Errors
    ///
    /// Will return `Err` if the deployment cannot be built or the results
    /// cannot be written.
    pub fn execute(
        &self, 
        general_config: &GeneralConfig
    ) -> Result<(), ExampleError> {
        let deployment = match self {
            Self::Custom(json_path) => custom(json_path)?,
            Self::Premade           => premade()?,
            Self::Random            => 
                random(general_config.deployment_config())?,
        };

        Reporter::new(general_config.report_config())
            .report(&deployment.best_stations())?;

        Ok(())
    }
}
