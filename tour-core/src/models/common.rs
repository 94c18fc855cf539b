use std::fmt;

/// A geographic coordinate: latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    /// Latitude, valid range is [-90, 90].
    pub lat: f64,
    /// Longitude, valid range is [-180, 180].
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a new instance of `GeoPoint`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "lat={}, lng={}", self.lat, self.lng)
    }
}
