use super::*;
use crate::helpers::*;
use std::sync::{Arc, Mutex};

fn create_world_gazetteer() -> (Gazetteer, tempfile::NamedTempFile) {
    create_gazetteer(&[
        create_place("Paris", "United States", 33.6609, -95.5555),
        create_place("Paris", "France", 48.8566, 2.3522),
        create_place("Berlin", "Germany", 52.52, 13.405),
        create_place("São Paulo", "Brazil", -23.5505, -46.6333),
        create_place_with_alt("Mumbai", "India", 19.076, 72.8777, &["Bombay"]),
    ])
}

#[test]
fn can_resolve_verbatim_canonical_name() {
    let (gazetteer, _file) = create_world_gazetteer();

    assert_eq!(gazetteer.resolve("Berlin"), Some(GeoPoint::new(52.52, 13.405)));
}

#[test]
fn can_resolve_names_differing_by_case_whitespace_and_diacritics() {
    let (gazetteer, _file) = create_world_gazetteer();

    let expected = Some(GeoPoint::new(-23.5505, -46.6333));
    assert_eq!(gazetteer.resolve("São Paulo"), expected);
    assert_eq!(gazetteer.resolve("  sao paulo  "), expected);
    assert_eq!(gazetteer.resolve("SAO PAULO"), expected);
}

#[test]
fn can_prefer_country_match_over_dataset_order() {
    let (gazetteer, _file) = create_world_gazetteer();

    // the unrelated US record comes first in the dataset and wins for a bare city query
    assert_eq!(gazetteer.resolve("Paris, France"), Some(GeoPoint::new(48.8566, 2.3522)));
    assert_eq!(gazetteer.resolve("Paris"), Some(GeoPoint::new(33.6609, -95.5555)));
}

#[test]
fn can_fall_back_to_city_part_on_unknown_country() {
    let (gazetteer, _file) = create_world_gazetteer();

    assert_eq!(gazetteer.resolve("Berlin, Atlantis"), Some(GeoPoint::new(52.52, 13.405)));
}

#[test]
fn can_resolve_alternate_names() {
    let (gazetteer, _file) = create_world_gazetteer();

    let expected = Some(GeoPoint::new(19.076, 72.8777));
    assert_eq!(gazetteer.resolve("Bombay"), expected);
    assert_eq!(gazetteer.resolve("bombay, india"), expected);
}

#[test]
fn can_prefer_canonical_name_over_earlier_alternate_name() {
    let (gazetteer, _file) = create_gazetteer(&[
        create_place_with_alt("Alpha", "X", 0., 0., &["Omega"]),
        create_place("Omega", "X", 0., 1.),
    ]);

    assert_eq!(gazetteer.resolve("Omega"), Some(GeoPoint::new(0., 1.)));
}

#[test]
fn can_break_duplicate_names_by_dataset_order() {
    let (gazetteer, _file) = create_gazetteer(&[
        create_place("Springfield", "United States", 39.7817, -89.6501),
        create_place("Springfield", "United States", 37.2089, -93.2923),
    ]);

    assert_eq!(gazetteer.resolve("Springfield"), Some(GeoPoint::new(39.7817, -89.6501)));
    assert_eq!(gazetteer.resolve("Springfield, United States"), Some(GeoPoint::new(39.7817, -89.6501)));
}

#[test]
fn can_return_none_for_unknown_name() {
    let (gazetteer, _file) = create_world_gazetteer();

    assert_eq!(gazetteer.resolve("Atlantis"), None);
}

#[test]
fn can_skip_records_with_invalid_coordinates() {
    let (gazetteer, _file) = create_gazetteer(&[
        create_place("Broken", "X", 123., 0.),
        create_place("Valid", "X", 1., 2.),
    ]);

    assert_eq!(gazetteer.resolve("Broken"), None);
    assert_eq!(gazetteer.resolve("Valid"), Some(GeoPoint::new(1., 2.)));
}

#[test]
fn can_degrade_to_miss_on_missing_dataset() {
    let (logger, messages) = create_message_buffer();
    let gazetteer = Gazetteer::new("/nonexistent/cities.json", logger);

    assert_eq!(gazetteer.resolve("Berlin"), None);
    assert_eq!(messages.lock().unwrap().len(), 1);
}

#[test]
fn can_degrade_to_miss_on_malformed_dataset() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"not json at all").unwrap();
    let (logger, messages) = create_message_buffer();
    let gazetteer = Gazetteer::new(file.path(), logger);

    assert_eq!(gazetteer.resolve("Berlin"), None);
    assert!(messages.lock().unwrap()[0].contains("cannot load dataset"));
}

#[test]
fn can_reuse_cache_after_backing_store_disappears() {
    let (gazetteer, file) = create_world_gazetteer();

    assert!(gazetteer.resolve("Berlin").is_some());
    file.close().unwrap();

    assert!(gazetteer.resolve("Berlin").is_some());
    assert!(gazetteer.resolve("Paris").is_some());
}

fn create_message_buffer() -> (tour_core::prelude::InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages: Arc<Mutex<Vec<String>>> = Arc::default();
    let recorded = messages.clone();

    (Arc::new(move |msg: &str| recorded.lock().unwrap().push(msg.to_string())), messages)
}
