//! Core crate contains building blocks to compute a visiting order over named
//! geographic locations: a location resolution seam, haversine distances and
//! two route construction algorithms.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/slow/mod.rs"]
pub mod slow;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
