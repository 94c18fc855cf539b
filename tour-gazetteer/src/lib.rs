//! Gazetteer crate provides deterministic, offline resolution of free text place names
//! into geo coordinates using a local city dataset. The dataset is loaded lazily on the
//! first lookup and cached for the remainder of the process.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

mod dataset;
pub use self::dataset::{deserialize_dataset, PlaceRecord};

mod normalize;
pub use self::normalize::fold_key;

mod resolver;
pub use self::resolver::{shared, Gazetteer};
