use super::*;
use tour_core::prelude::{GeoPoint, Tour};

fn create_test_tour() -> Tour {
    Tour {
        stops: vec!["Alpha".to_string(), "Beta".to_string(), "Alpha".to_string()],
        track: vec![GeoPoint::new(0., 0.), GeoPoint::new(0., 1.), GeoPoint::new(0., 0.)],
        distance_km: 222.390161,
    }
}

#[test]
fn can_create_response_in_web_shape() {
    let response = create_response(&create_test_tour());

    assert_eq!(response.route, vec!["Alpha", "Beta", "Alpha"]);
    assert_eq!(response.total_distance, 222.39);
    assert_eq!(response.coordinates.len(), 3);
    assert_eq!(response.route_with_coords.len(), 3);
    assert_eq!(response.route_with_coords[1].location, "Beta");
    assert_eq!(response.route_with_coords[1].lng, 1.);
}

#[test]
fn can_serialize_response_fields() {
    let value = serde_json::to_value(create_response(&create_test_tour())).unwrap();

    assert_eq!(value["route"][0], "Alpha");
    assert_eq!(value["total_distance"], 222.39);
    assert_eq!(value["coordinates"][1]["lng"], 1.);
    assert_eq!(value["route_with_coords"][2]["location"], "Alpha");
}

#[test]
fn can_read_city_list_skipping_blank_lines() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "Paris\n\n  Berlin  \nMadrid\n").unwrap();

    let destinations = read_city_list(file.path().to_str().unwrap()).unwrap();

    assert_eq!(destinations, vec!["Paris", "Berlin", "Madrid"]);
}

#[test]
fn can_parse_solve_arguments() {
    let matches = get_solve_command().get_matches_from([
        "solve",
        "Berlin",
        "Paris",
        "Madrid",
        "--algorithm",
        "held-karp",
        "--round-trip",
    ]);

    assert_eq!(matches.get_one::<String>(ORIGIN_ARG_NAME).unwrap(), "Berlin");
    let destinations: Vec<_> = matches.get_many::<String>(DESTINATIONS_ARG_NAME).unwrap().collect();
    assert_eq!(destinations, vec!["Paris", "Madrid"]);
    assert_eq!(matches.get_one::<String>(ALGORITHM_ARG_NAME).unwrap(), "held-karp");
    assert!(matches.get_flag(ROUND_TRIP_ARG_NAME));
}
