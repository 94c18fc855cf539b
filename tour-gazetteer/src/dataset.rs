//! This module defines the serialized city dataset format produced by the import tooling.

#[cfg(test)]
#[path = "../tests/unit/dataset_test.rs"]
mod dataset_test;

use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};
use tour_core::prelude::GenericResult;

/// A persisted entry of the city dataset: a canonical place name with its coordinate and
/// possibly empty country and alternate names.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlaceRecord {
    /// A canonical place name.
    pub name: String,
    /// A country name, may be empty.
    #[serde(default)]
    pub country: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Alternate names for the same place.
    #[serde(default)]
    pub alt_names: Vec<String>,
}

impl PlaceRecord {
    /// Checks that the coordinate is inside the valid degree ranges. The import tooling
    /// guarantees this, hand edited datasets may not.
    pub fn has_valid_coordinate(&self) -> bool {
        (-90. ..=90.).contains(&self.lat) && (-180. ..=180.).contains(&self.lng)
    }
}

/// Reads a dataset from a reader which provides a json array of place records.
pub fn deserialize_dataset<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<PlaceRecord>> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize dataset: '{err}'").into())
}
