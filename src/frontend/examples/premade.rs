use crate::backend::deployment::Deployment;
use crate::backend::mathphysics::{Meter, Point2D};
use crate::backend::station::{Station, StationBuildError};


pub const DEVICE_LOCATIONS: [Point2D; 4] = [
    Point2D::new(0.0, 0.0),
    Point2D::new(100.0, 100.0),
    Point2D::new(15.0, 10.0),
    Point2D::new(18.0, 18.0),
];

// Position and reach of each link station.
const LINK_STATIONS: [(Point2D, Meter); 4] = [
    (Point2D::new(0.0, 0.0), 10.0),
    (Point2D::new(2.0, 2.0), 8.0),
    (Point2D::new(20.0, 20.0), 5.0),
    (Point2D::new(10.0, 0.0), 12.0),
];


/// # Errors
///
/// Will return `Err` if one of the premade stations has invalid reach.
pub fn link_stations() -> Result<Vec<Station>, StationBuildError> {
    LINK_STATIONS
        .iter()
        .map(|(position, reach)| Station::build(*position, *reach))
        .collect()
}

pub fn premade() -> Result<Deployment, StationBuildError> {
    Ok(Deployment::new(link_stations()?, DEVICE_LOCATIONS.to_vec()))
}
