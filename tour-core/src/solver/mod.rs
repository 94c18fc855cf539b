//! This module provides route construction: a shared location resolution step and two
//! algorithms which consume its result, a greedy nearest neighbor heuristic and an exact
//! dynamic programming solver.

use crate::models::{GeoPoint, Tour};
use crate::utils::InfoLogger;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

mod nearest_neighbor;

mod held_karp;
pub use self::held_karp::MAX_EXACT_DESTINATIONS;

/// Specifies which route construction algorithm to run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Algorithm {
    /// Greedy nearest neighbor heuristic, fast but not necessarily optimal.
    NearestNeighbor,
    /// Exact Held-Karp dynamic programming solver, bounded by [`MAX_EXACT_DESTINATIONS`].
    HeldKarp,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest-neighbor" => Ok(Self::NearestNeighbor),
            "held-karp" => Ok(Self::HeldKarp),
            _ => Err(format!("unknown algorithm: '{s}'")),
        }
    }
}

/// A typed failure returned by route construction. No partial tour is returned on failure.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverError {
    /// The origin name could not be matched in the dataset.
    UnresolvedOrigin(String),
    /// Every destination name failed resolution.
    NoResolvableDestinations,
    /// Resolved destination count exceeds the exact solver bound. The caller is expected
    /// to retry with the nearest neighbor heuristic.
    TooManyDestinations {
        /// Amount of resolved destinations in the request.
        actual: usize,
        /// The exact solver bound.
        limit: usize,
    },
    /// The dynamic programming table held no complete path, which indicates an internal
    /// invariant violation.
    NoOptimalSolution,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedOrigin(name) => write!(f, "cannot resolve starting location: '{name}'"),
            Self::NoResolvableDestinations => write!(f, "no destination could be resolved"),
            Self::TooManyDestinations { actual, limit } => {
                write!(f, "too many destinations for the exact solver: {actual} > {limit}, use nearest-neighbor")
            }
            Self::NoOptimalSolution => write!(f, "no optimal solution: dynamic programming table is incomplete"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Resolves a free text location name to a geo coordinate.
pub trait LocationResolver {
    /// Returns a coordinate for given name or `None` when the name is unknown.
    fn resolve(&self, name: &str) -> Option<GeoPoint>;
}

/// A resolved routing problem: the origin at index 0, destinations at indices 1..n in the
/// order they were supplied by the caller.
struct RoutingProblem {
    names: Vec<String>,
    points: Vec<GeoPoint>,
}

/// Resolves the origin and every destination name. An unresolved origin is fatal, an
/// unresolved destination is dropped with a warning; repeated destination names are
/// visited once, keeping the first occurrence.
fn resolve_problem(
    resolver: &dyn LocationResolver,
    origin: &str,
    destinations: &[String],
    logger: &InfoLogger,
) -> Result<RoutingProblem, SolverError> {
    let origin_point =
        resolver.resolve(origin).ok_or_else(|| SolverError::UnresolvedOrigin(origin.to_string()))?;

    let mut names = vec![origin.to_string()];
    let mut points = vec![origin_point];
    let mut seen = FxHashSet::default();

    for name in destinations {
        if !seen.insert(name.as_str()) {
            continue;
        }

        match resolver.resolve(name) {
            Some(point) => {
                names.push(name.clone());
                points.push(point);
            }
            None => (logger)(&format!("cannot resolve destination '{name}', skipping")),
        }
    }

    if names.len() == 1 {
        return Err(SolverError::NoResolvableDestinations);
    }

    Ok(RoutingProblem { names, points })
}

/// Computes a visiting order for given destinations starting at the origin using the
/// selected algorithm. When `round_trip` is set, the tour ends with a leg back to the
/// origin.
pub fn solve(
    resolver: &dyn LocationResolver,
    origin: &str,
    destinations: &[String],
    round_trip: bool,
    algorithm: Algorithm,
    logger: &InfoLogger,
) -> Result<Tour, SolverError> {
    let problem = resolve_problem(resolver, origin, destinations, logger)?;

    match algorithm {
        Algorithm::NearestNeighbor => Ok(nearest_neighbor::construct_tour(&problem, round_trip)),
        Algorithm::HeldKarp => held_karp::construct_tour(&problem, round_trip),
    }
}
