use crate::models::GeoPoint;

/// A computed visiting order over named locations. A tour is a value owned by the caller
/// which requested it, it is never persisted.
#[derive(Clone, Debug)]
pub struct Tour {
    /// Location names in visiting order: the origin first, then each resolved destination
    /// once, then the origin again for a round trip.
    pub stops: Vec<String>,
    /// Geo coordinates parallel to `stops`.
    pub track: Vec<GeoPoint>,
    /// Total travelled distance in kilometers, summed leg by leg in visiting order.
    pub distance_km: f64,
}
