//! This module contains geometric algorithms.

pub mod geo;
