//! This module contains the domain model: geo points, distance matrices and computed tours.

mod common;
pub use self::common::*;

mod matrix;
pub use self::matrix::*;

mod tour;
pub use self::tour::*;
