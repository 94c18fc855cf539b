//! Great-circle distance calculation for geo coordinates.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/geo_test.rs"]
mod geo_test;

use crate::models::GeoPoint;

/// Earth mean radius in kilometers.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0088;

/// Gets great-circle distance between two points in kilometers using haversine formula.
/// The function is symmetric and returns zero for equal points; inputs outside the valid
/// degree ranges produce unspecified results.
pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lat = degree_rad(to.lat - from.lat);
    let d_lng = degree_rad(to.lng - from.lng);

    let lat1 = degree_rad(from.lat);
    let lat2 = degree_rad(to.lat);

    let a =
        (d_lat / 2.).sin() * (d_lat / 2.).sin() + (d_lng / 2.).sin() * (d_lng / 2.).sin() * lat1.cos() * lat2.cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_MEAN_RADIUS_KM * c
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.
}
