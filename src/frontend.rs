pub mod cli;
pub mod config;
pub mod examples;
pub mod report;


pub const RESULTS_FILE_SUFFIX: &str = "link_stations.json";
