use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{error, LevelFilter};

use crate::backend::mathphysics::Meter;
use crate::frontend::config::{DeploymentConfig, GeneralConfig, ReportConfig};
use crate::frontend::examples::Example;


pub const ARG_AREA_SIDE: &str    = "area side";
pub const ARG_DEVICE_COUNT: &str = "device count";
pub const ARG_EXAMPLE: &str      = "example";
pub const ARG_JSON_INPUT: &str   = "deployment path";
pub const ARG_JSON_OUTPUT: &str  = "output directory path";
pub const ARG_PRECISION: &str    = "precision";
pub const ARG_VERBOSE: &str      = "verbose";

pub const EXP_CUSTOM: &str  = "custom";
pub const EXP_PREMADE: &str = "premade";
pub const EXP_RANDOM: &str  = "random";

pub const DEFAULT_AREA_SIDE: &str    = "50.0";
pub const DEFAULT_DEVICE_COUNT: &str = "10";
pub const DEFAULT_PRECISION: &str    = "2";


pub fn handle_arguments(matches: &ArgMatches) {
    init_logger(matches.get_flag(ARG_VERBOSE));

    let Some(example) = example(matches) else {
        return;
    };

    let general_config = GeneralConfig::new(
        deployment_config(matches),
        report_config(matches)
    );

    if let Err(err) = example.execute(&general_config) {
        error!("{err}");
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn example(matches: &ArgMatches) -> Option<Example> {
    let example_title = matches.get_one::<String>(ARG_EXAMPLE)?;

    let example = match example_title.as_str() {
        EXP_CUSTOM  => Example::Custom(json_input_path(matches)?),
        EXP_PREMADE => Example::Premade,
        EXP_RANDOM  => Example::Random,
        _           => return None,
    };

    Some(example)
}

fn deployment_config(matches: &ArgMatches) -> DeploymentConfig {
    DeploymentConfig::new(device_count(matches), area_side(matches))
}

fn report_config(matches: &ArgMatches) -> ReportConfig {
    ReportConfig::new(output_directory(matches), precision(matches))
}

fn json_input_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<PathBuf>(ARG_JSON_INPUT)
        .cloned()
}

fn device_count(matches: &ArgMatches) -> usize {
    matches
        .get_one::<usize>(ARG_DEVICE_COUNT)
        .copied()
        .unwrap_or_default()
}

fn area_side(matches: &ArgMatches) -> Meter {
    matches
        .get_one::<Meter>(ARG_AREA_SIDE)
        .copied()
        .unwrap_or_default()
}

fn output_directory(matches: &ArgMatches) -> Option<&Path> {
    matches
        .get_one::<PathBuf>(ARG_JSON_OUTPUT)
        .map(|p| &**p)
}

fn precision(matches: &ArgMatches) -> usize {
    matches
        .get_one::<usize>(ARG_PRECISION)
        .copied()
        .unwrap_or_default()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::cli::command;


    fn matches_from(args: &[&str]) -> ArgMatches {
        command()
            .try_get_matches_from(args)
            .unwrap_or_else(|error| panic!("{}", error))
    }


    #[test]
    fn premade_example_from_arguments() {
        let matches = matches_from(&["link_station", "-x", EXP_PREMADE]);

        assert_eq!(example(&matches), Some(Example::Premade));
    }

    #[test]
    fn custom_example_carries_json_path() {
        let matches = matches_from(
            &["link_station", "-x", EXP_CUSTOM, "--ji", "deployment.json"]
        );

        assert_eq!(
            example(&matches), 
            Some(Example::Custom(PathBuf::from("deployment.json")))
        );
    }

    #[test]
    fn deployment_config_from_arguments() {
        let matches = matches_from(
            &["link_station", "-x", EXP_RANDOM, "-n", "25", "--area", "12.5"]
        );

        let deployment_config = deployment_config(&matches);

        assert_eq!(deployment_config.device_count(), 25);
        assert_eq!(deployment_config.area_side(), 12.5);
    }

    #[test]
    fn report_config_from_arguments() {
        let matches = matches_from(
            &["link_station", "-x", EXP_PREMADE, "--jo", "results", "-p", "3"]
        );

        let report_config = report_config(&matches);

        assert_eq!(report_config.output_directory(), Some(Path::new("results")));
        assert_eq!(report_config.precision(), 3);
    }
}
