use log::{debug, warn};
use serde::Serialize;

use super::mathphysics::Point2D;
use super::ranking::{select_best, EvaluatedStation};
use super::station::{LinkPower, Station};


#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RankedResult {
    device: Point2D,
    best: Option<EvaluatedStation>,
}

impl RankedResult {
    #[must_use]
    pub fn new(device: Point2D, best: Option<EvaluatedStation>) -> Self {
        Self { device, best }
    }

    #[must_use]
    pub fn device(&self) -> &Point2D {
        &self.device
    }

    #[must_use]
    pub fn best(&self) -> Option<&EvaluatedStation> {
        self.best.as_ref()
    }

    #[must_use]
    pub fn best_power(&self) -> Option<LinkPower> {
        self.best.map(|evaluated| evaluated.power())
    }

    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.best.is_some()
    }
}


/// Scores every station of the catalog against `device`, in catalog order.
#[must_use]
pub fn evaluate_stations(
    device: &Point2D, 
    stations: &[Station]
) -> Vec<EvaluatedStation> {
    debug!("Evaluating {} stations for point {device}", stations.len());

    let evaluated_stations: Vec<EvaluatedStation> = stations
        .iter()
        .map(|station| EvaluatedStation::evaluate(station, device))
        .collect();

    debug!("Station powers for point {device}: {evaluated_stations:?}");

    if evaluated_stations.iter().any(|evaluated| evaluated.power().is_nan()) {
        warn!("Missing coordinates for point {device}, NaN powers are skipped");
    }

    evaluated_stations
}

#[must_use]
pub fn best_station_for(device: &Point2D, stations: &[Station]) -> RankedResult {
    let best = select_best(evaluate_stations(device, stations));

    RankedResult::new(*device, best)
}

#[must_use]
pub fn best_stations_for(
    devices: &[Point2D], 
    stations: &[Station]
) -> Vec<RankedResult> {
    devices
        .iter()
        .map(|device| best_station_for(device, stations))
        .collect()
}
