#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::str::FromStr;
use tour_core::prelude::*;
use tour_gazetteer::Gazetteer;

const ORIGIN_ARG_NAME: &str = "ORIGIN";
const DESTINATIONS_ARG_NAME: &str = "DESTINATIONS";
const ALGORITHM_ARG_NAME: &str = "algorithm";
const ROUND_TRIP_ARG_NAME: &str = "round-trip";
const DATA_ARG_NAME: &str = "data";
const CITY_LIST_ARG_NAME: &str = "city-list";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_solve_command() -> Command {
    Command::new("solve")
        .about("Computes a visiting order for destinations starting at origin")
        .arg(Arg::new(ORIGIN_ARG_NAME).help("Sets the starting location").required(true).index(1))
        .arg(
            Arg::new(DESTINATIONS_ARG_NAME)
                .help("Sets destination names, one name per argument")
                .action(ArgAction::Append)
                .index(2),
        )
        .arg(
            Arg::new(CITY_LIST_ARG_NAME)
                .help("Sets the path to a file with destination names, one per line")
                .long(CITY_LIST_ARG_NAME)
                .short('c'),
        )
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies the route construction algorithm")
                .long(ALGORITHM_ARG_NAME)
                .short('a')
                .value_parser(["nearest-neighbor", "held-karp"])
                .default_value("nearest-neighbor"),
        )
        .arg(
            Arg::new(ROUND_TRIP_ARG_NAME)
                .help("Returns to the starting location at the end")
                .long(ROUND_TRIP_ARG_NAME)
                .short('r')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(DATA_ARG_NAME)
                .help("Sets the path to the city dataset, overrides the default")
                .long(DATA_ARG_NAME)
                .short('d'),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .long(OUT_RESULT_ARG_NAME)
                .short('o'),
        )
}

/// A serializable solve result in the shape the original web layer exposed.
#[derive(Serialize)]
struct SolveResponse {
    route: Vec<String>,
    total_distance: f64,
    coordinates: Vec<CoordinateEntry>,
    route_with_coords: Vec<StopEntry>,
}

#[derive(Serialize)]
struct CoordinateEntry {
    lat: f64,
    lng: f64,
}

#[derive(Serialize)]
struct StopEntry {
    location: String,
    lat: f64,
    lng: f64,
}

fn create_response(tour: &Tour) -> SolveResponse {
    SolveResponse {
        route: tour.stops.clone(),
        total_distance: (tour.distance_km * 100.).round() / 100.,
        coordinates: tour.track.iter().map(|point| CoordinateEntry { lat: point.lat, lng: point.lng }).collect(),
        route_with_coords: tour
            .stops
            .iter()
            .zip(tour.track.iter())
            .map(|(name, point)| StopEntry { location: name.clone(), lat: point.lat, lng: point.lng })
            .collect(),
    }
}

pub fn run_solve(matches: &ArgMatches) -> Result<(), String> {
    let origin = matches.get_one::<String>(ORIGIN_ARG_NAME).cloned().ok_or("starting location is required")?;

    let mut destinations: Vec<String> = matches
        .get_many::<String>(DESTINATIONS_ARG_NAME)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if let Some(path) = matches.get_one::<String>(CITY_LIST_ARG_NAME) {
        destinations.extend(read_city_list(path)?);
    }

    if destinations.is_empty() {
        return Err("at least one destination must be provided".to_string());
    }

    let algorithm = matches
        .get_one::<String>(ALGORITHM_ARG_NAME)
        .map(|value| Algorithm::from_str(value))
        .transpose()?
        .unwrap_or(Algorithm::NearestNeighbor);
    let round_trip = matches.get_flag(ROUND_TRIP_ARG_NAME);

    let logger = create_stderr_logger();
    let tour = match matches.get_one::<String>(DATA_ARG_NAME) {
        Some(path) => {
            let gazetteer = Gazetteer::new(path, logger.clone());
            solve(&gazetteer, &origin, &destinations, round_trip, algorithm, &logger)
        }
        None => solve(tour_gazetteer::shared(), &origin, &destinations, round_trip, algorithm, &logger),
    }
    .map_err(|err| err.to_string())?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let mut writer = create_write_buffer(out_result);

    serde_json::to_writer_pretty(&mut writer, &create_response(&tour)).map_err(|err| err.to_string())?;
    writer.write_all(b"\n").map_err(|err| err.to_string())?;

    Ok(())
}

fn read_city_list(path: &str) -> Result<Vec<String>, String> {
    std::fs::read_to_string(path)
        .map_err(|err| format!("cannot read city list file '{path}': '{err}'"))
        .map(|content| content.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect())
}
