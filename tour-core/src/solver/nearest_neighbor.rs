#[cfg(test)]
#[path = "../../tests/unit/solver/nearest_neighbor_test.rs"]
mod nearest_neighbor_test;

use super::RoutingProblem;
use crate::algorithms::geo::haversine_distance;
use crate::models::Tour;

/// Constructs a tour by always advancing to the closest not yet visited destination.
/// Greedy: deterministic, runs in O(n^2), but the result is not necessarily optimal.
/// Equal distances break to the destination supplied earlier by the caller.
pub(super) fn construct_tour(problem: &RoutingProblem, round_trip: bool) -> Tour {
    let size = problem.points.len();

    let mut stops = vec![problem.names[0].clone()];
    let mut track = vec![problem.points[0]];
    let mut visited = vec![false; size];
    visited[0] = true;

    let mut current = 0;
    let mut distance_km = 0.;

    for _ in 1..size {
        let mut nearest: Option<(usize, f64)> = None;

        // strictly-less comparison keeps the earliest destination on ties
        for next in (1..size).filter(|&next| !visited[next]) {
            let leg = haversine_distance(&problem.points[current], &problem.points[next]);
            if nearest.is_none_or(|(_, best)| leg < best) {
                nearest = Some((next, leg));
            }
        }

        if let Some((next, leg)) = nearest {
            stops.push(problem.names[next].clone());
            track.push(problem.points[next]);
            distance_km += leg;
            visited[next] = true;
            current = next;
        }
    }

    if round_trip {
        distance_km += haversine_distance(&problem.points[current], &problem.points[0]);
        stops.push(problem.names[0].clone());
        track.push(problem.points[0]);
    }

    Tour { stops, track, distance_km }
}
