//! Convenient re-exports of the crate public API.

pub use crate::algorithms::geo::{haversine_distance, EARTH_MEAN_RADIUS_KM};
pub use crate::models::{DistanceMatrix, GeoPoint, Tour};
pub use crate::solver::{solve, Algorithm, LocationResolver, SolverError, MAX_EXACT_DESTINATIONS};
pub use crate::utils::{create_noop_logger, create_stderr_logger, GenericError, GenericResult, InfoLogger};
