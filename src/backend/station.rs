use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::mathphysics::{Meter, Point2D, Position};


pub use power::*;


pub mod power;


#[derive(Error, Debug, PartialEq)]
pub enum StationBuildError {
    #[error("Station reach must be a positive number, got {0}")]
    NonPositiveReach(Meter),
}


#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StationData")]
pub struct Station {
    position: Point2D,
    reach: Meter,
}

impl Station {
    /// # Errors
    ///
    /// Will return `Err` if `reach` is not a positive number.
    pub fn build(
        position: Point2D, 
        reach: Meter
    ) -> Result<Self, StationBuildError> {
        // Also rejects NaN.
        if !(reach > 0.0) {
            return Err(StationBuildError::NonPositiveReach(reach));
        }

        Ok(Self { position, reach })
    }

    #[must_use]
    pub fn power_at<P: Position>(&self, location: &P) -> LinkPower {
        LinkPower::from_distance(self.distance_to(location), self.reach)
    }
}

impl Position for Station {
    fn position(&self) -> &Point2D {
        &self.position
    }
}


#[derive(Deserialize)]
struct StationData {
    position: Point2D,
    reach: Meter,
}

impl TryFrom<StationData> for Station {
    type Error = StationBuildError;

    fn try_from(data: StationData) -> Result<Self, Self::Error> {
        Self::build(data.position, data.reach)
    }
}
