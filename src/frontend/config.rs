use std::path::{Path, PathBuf};

use crate::backend::mathphysics::Meter;


pub struct GeneralConfig {
    deployment: DeploymentConfig,
    report: ReportConfig,
}

impl GeneralConfig {
    #[must_use]
    pub fn new(deployment: DeploymentConfig, report: ReportConfig) -> Self {
        Self { deployment, report }
    }
    
    #[must_use]
    pub fn deployment_config(&self) -> &DeploymentConfig {
        &self.deployment
    }
    
    #[must_use]
    pub fn report_config(&self) -> &ReportConfig {
        &self.report
    }
}


// Only the random example generates its own device locations.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeploymentConfig {
    device_count: usize,
    area_side: Meter,
}

impl DeploymentConfig {
    #[must_use]
    pub fn new(device_count: usize, area_side: Meter) -> Self {
        Self { device_count, area_side }
    }

    #[must_use]
    pub fn device_count(&self) -> usize {
        self.device_count
    }
    
    #[must_use]
    pub fn area_side(&self) -> Meter {
        self.area_side
    }
}


#[derive(Clone, Debug, Default)]
pub struct ReportConfig {
    output_directory: Option<PathBuf>,
    precision: usize,
}

impl ReportConfig {
    #[must_use]
    pub fn new(output_directory: Option<&Path>, precision: usize) -> Self {
        Self {
            output_directory: output_directory.map(Path::to_path_buf),
            precision,
        }
    }
    
    #[must_use]
    pub fn output_directory(&self) -> Option<&Path> {
        self.output_directory.as_deref()
    }

    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }
}
