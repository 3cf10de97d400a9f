use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::mathphysics::Point2D;
use super::selection::{best_stations_for, RankedResult};
use super::station::Station;


#[derive(Error, Debug)]
pub enum DeploymentError {
    #[error("Failed to read deployment file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse deployment: {0}")]
    Json(#[from] serde_json::Error),
}


// Station catalog together with the device locations it has to cover.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Deployment {
    stations: Vec<Station>,
    device_locations: Vec<Point2D>,
}

impl Deployment {
    #[must_use]
    pub fn new(stations: Vec<Station>, device_locations: Vec<Point2D>) -> Self {
        Self { stations, device_locations }
    }

    #[must_use]
    pub fn stations(&self) -> &[Station] {
        self.stations.as_slice()
    }

    #[must_use]
    pub fn device_locations(&self) -> &[Point2D] {
        self.device_locations.as_slice()
    }

    #[must_use]
    pub fn best_stations(&self) -> Vec<RankedResult> {
        best_stations_for(&self.device_locations, &self.stations)
    }

    /// # Errors
    ///
    /// Will return `Err` if the string is not a valid deployment, including 
    /// stations with non-positive reach.
    pub fn from_json_str(json_string: &str) -> Result<Self, DeploymentError> {
        Ok(serde_json::from_str(json_string)?)
    }
    
    /// # Errors
    ///
    /// Will return `Err` if the file at `deployment_path` cannot be read or 
    /// does not contain a valid deployment.
    pub fn from_json(deployment_path: &Path) -> Result<Self, DeploymentError> {
        let json_string = fs::read_to_string(deployment_path)?;

        Self::from_json_str(&json_string)
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    const DEPLOYMENT_JSON: &str = r#"{
        "stations": [
            { "position": [0, 0], "reach": 10 },
            { "position": [20, 20], "reach": 5 }
        ],
        "device_locations": [[0, 0], [100, 100], [18, 18]]
    }"#;


    #[test]
    fn parse_deployment() {
        let deployment = Deployment::from_json_str(DEPLOYMENT_JSON)
            .unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(deployment.stations().len(), 2);
        assert_eq!(
            deployment.device_locations(), 
            &[
                Point2D::new(0.0, 0.0), 
                Point2D::new(100.0, 100.0),
                Point2D::new(18.0, 18.0),
            ]
        );
    }

    #[test]
    fn deployment_results_follow_device_order() {
        let deployment = Deployment::from_json_str(DEPLOYMENT_JSON)
            .unwrap_or_else(|error| panic!("{}", error));

        let results = deployment.best_stations();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_covered());
        assert!(!results[1].is_covered());
        assert_eq!(
            results[2].best().map(|best| *best.station()),
            Some(deployment.stations()[1])
        );
    }

    #[test]
    fn reject_station_without_reach() {
        let json = r#"{
            "stations": [{ "position": [0, 0], "reach": -1 }],
            "device_locations": []
        }"#;

        assert!(
            matches!(
                Deployment::from_json_str(json),
                Err(DeploymentError::Json(_))
            )
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Path::new("/nonexistent/link_station/deployment.json");

        assert!(
            matches!(Deployment::from_json(path), Err(DeploymentError::Io(_)))
        );
    }
}
