use std::path::Path;

use log::info;

use crate::backend::deployment::{Deployment, DeploymentError};


pub fn custom(deployment_path: &Path) -> Result<Deployment, DeploymentError> {
    let deployment = Deployment::from_json(deployment_path)?;

    info!(
        "Loaded {} stations and {} device locations from {}",
        deployment.stations().len(),
        deployment.device_locations().len(),
        deployment_path.display()
    );

    Ok(deployment)
}
