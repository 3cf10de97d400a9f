use log::info;
use rand::prelude::*;
use thiserror::Error;

use crate::backend::deployment::Deployment;
use crate::backend::mathphysics::{Meter, Point2D};
use crate::backend::station::StationBuildError;
use crate::frontend::config::DeploymentConfig;

use super::premade::link_stations;


#[derive(Error, Debug)]
pub enum RandomDeploymentError {
    #[error("Area side must be a finite number, got {0}")]
    NonFiniteArea(Meter),
    #[error(transparent)]
    Station(#[from] StationBuildError),
}


fn random_device_locations(
    device_count: usize, 
    area_side: Meter
) -> Result<Vec<Point2D>, RandomDeploymentError> {
    if !area_side.is_finite() {
        return Err(RandomDeploymentError::NonFiniteArea(area_side));
    }

    let mut rng = rand::rng();
    let side    = area_side.max(0.0);

    let device_locations = (0..device_count)
        .map(|_| Point2D::new(
            rng.random_range(0.0..=side),
            rng.random_range(0.0..=side)
        ))
        .collect();

    Ok(device_locations)
}

/// Random device locations over a square area against the premade stations.
///
/// # Errors
///
/// Will return `Err` if the area side is not finite.
pub fn random(
    deployment_config: &DeploymentConfig
) -> Result<Deployment, RandomDeploymentError> {
    info!(
        "Generating {} device locations over {}x{} area",
        deployment_config.device_count(),
        deployment_config.area_side(),
        deployment_config.area_side()
    );

    let device_locations = random_device_locations(
        deployment_config.device_count(), 
        deployment_config.area_side()
    )?;

    Ok(Deployment::new(link_stations()?, device_locations))
}
