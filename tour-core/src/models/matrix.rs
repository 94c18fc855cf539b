#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::algorithms::geo::haversine_distance;
use crate::models::GeoPoint;

/// A dense row-major matrix of pairwise distances in kilometers. When built from geo
/// points it is symmetric with a zero diagonal.
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Precomputes pairwise haversine distances between given points.
    pub fn new(points: &[GeoPoint]) -> Self {
        let values =
            points.iter().flat_map(|from| points.iter().map(move |to| haversine_distance(from, to))).collect();

        Self { size: points.len(), values }
    }

    /// Returns amount of points the matrix was built from.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets distance between two points by their indices.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }
}
