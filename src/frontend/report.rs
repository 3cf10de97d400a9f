use std::fmt;
use std::io;

use log::info;
use thiserror::Error;

use crate::backend::mathphysics::Position;
use crate::backend::ranking::select_best;
use crate::backend::selection::RankedResult;
use crate::backend::station::LinkPower;

use super::config::ReportConfig;

use output::write_results;


mod output;


#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write results: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to serialize results: {0}")]
    Serialization(#[from] serde_json::Error),
}


pub struct ReportLine<'a> {
    result: &'a RankedResult,
    precision: usize,
}

impl<'a> ReportLine<'a> {
    #[must_use]
    pub fn new(result: &'a RankedResult, precision: usize) -> Self {
        Self { result, precision }
    }
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let device = self.result.device();

        match self.result.best() {
            Some(best) => write!(
                f,
                "Best link station for point {device} is {} with power {:.*}",
                best.position(),
                self.precision,
                best.power().value()
            ),
            None => write!(
                f, 
                "No link station within reach for point {device}"
            ),
        }
    }
}


pub struct Reporter<'a> {
    config: &'a ReportConfig,
}

impl<'a> Reporter<'a> {
    #[must_use]
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// # Errors
    ///
    /// Will return `Err` if the results cannot be written to the output 
    /// directory.
    pub fn report(&self, results: &[RankedResult]) -> Result<(), ReportError> {
        for result in results {
            println!("{}", ReportLine::new(result, self.config.precision()));
        }

        summary_info(results);

        if let Some(file_path) = write_results(
            self.config.output_directory(), 
            results
        )? {
            info!("Results written to {}", file_path.display());
        }

        Ok(())
    }
}


fn summary_info(results: &[RankedResult]) {
    let covered_count = results
        .iter()
        .filter(|result| result.is_covered())
        .count();

    info!("Device locations evaluated: {}", results.len());
    info!("Device locations within reach: {covered_count}");

    if let Some(strongest) = strongest_power(results) {
        info!("Strongest link power: {strongest}");
    }
}

fn strongest_power(results: &[RankedResult]) -> Option<LinkPower> {
    select_best(results.iter().filter_map(|result| result.best().copied()))
        .map(|best| best.power())
}
