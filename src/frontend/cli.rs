use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

use crate::backend::mathphysics::Meter;

use args::{
    handle_arguments, ARG_AREA_SIDE, ARG_DEVICE_COUNT, ARG_EXAMPLE, 
    ARG_JSON_INPUT, ARG_JSON_OUTPUT, ARG_PRECISION, ARG_VERBOSE, 
    DEFAULT_AREA_SIDE, DEFAULT_DEVICE_COUNT, DEFAULT_PRECISION, EXP_CUSTOM, 
    EXP_PREMADE, EXP_RANDOM
};


mod args;


pub fn cli() {
    handle_arguments(&command().get_matches());
}

fn command() -> Command {
    Command::new("link_station")
        .version("0.1.0")
        .about("Selects the most suitable link station for device locations.")
        .args([
            arg_example(),
            arg_json_input(),
            arg_device_count(),
            arg_area_side(),
            arg_json_output(),
            arg_precision(),
            arg_verbose(),
        ])
        .arg_required_else_help(true)
}

fn arg_example() -> Arg {
    Arg::new(ARG_EXAMPLE)
        .short('x')
        .long("example")
        .requires_ifs([(EXP_CUSTOM, ARG_JSON_INPUT)])
        .value_parser([EXP_CUSTOM, EXP_PREMADE, EXP_RANDOM])
        .required(true)
        .help("Choose device locations and station catalog source")
}

fn arg_json_input() -> Arg {
    Arg::new(ARG_JSON_INPUT)
        .long("ji")
        .value_parser(value_parser!(PathBuf))
        .help(
            format!(
                "Deserialize stations and device locations from `.json` file \
                (\"{EXP_CUSTOM}\" example)"
            )
        )
}

fn arg_device_count() -> Arg {
    Arg::new(ARG_DEVICE_COUNT)
        .short('n')
        .value_parser(value_parser!(usize))
        .default_value(DEFAULT_DEVICE_COUNT)
        .help(
            format!(
                "Set the number of device locations (non-negative integer) \
                (\"{EXP_RANDOM}\" example)"
            )
        )
}

fn arg_area_side() -> Arg {
    Arg::new(ARG_AREA_SIDE)
        .long("area")
        .value_parser(parse_area_side)
        .default_value(DEFAULT_AREA_SIDE)
        .help(
            format!(
                "Set the side of the square area device locations are placed \
                in (non-negative float) (\"{EXP_RANDOM}\" example)"
            )
        )
}

fn parse_area_side(value: &str) -> Result<Meter, String> {
    let area_side: Meter = value
        .parse()
        .map_err(|error| format!("{error}"))?;

    if !area_side.is_finite() || area_side < 0.0 {
        return Err(format!("expected a non-negative finite number, got {value}"));
    }

    Ok(area_side)
}

fn arg_json_output() -> Arg {
    Arg::new(ARG_JSON_OUTPUT)
        .long("jo")
        .value_parser(value_parser!(PathBuf))
        .help("Serialize selection results to a `.json` file in specified directory")
}

fn arg_precision() -> Arg {
    Arg::new(ARG_PRECISION)
        .short('p')
        .long("precision")
        .value_parser(value_parser!(usize))
        .default_value(DEFAULT_PRECISION)
        .help("Set the number of decimal places of reported power")
}

fn arg_verbose() -> Arg {
    Arg::new(ARG_VERBOSE)
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Show full log output")
}
