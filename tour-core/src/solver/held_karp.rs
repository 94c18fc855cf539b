#[cfg(test)]
#[path = "../../tests/unit/solver/held_karp_test.rs"]
mod held_karp_test;

use super::{RoutingProblem, SolverError};
use crate::models::{DistanceMatrix, Tour};

/// A hard cap on resolved destinations for the exact solver: the table below grows as
/// `2^n * n` entries with `2^n * n^2` transitions, which stays tractable up to this bound.
pub const MAX_EXACT_DESTINATIONS: usize = 20;

const NO_PREDECESSOR: u8 = u8::MAX;

/// Constructs a provably optimal tour with Held-Karp dynamic programming over destination
/// subsets. The returned distance is the global minimum over all Hamiltonian paths from
/// the origin visiting every resolved destination exactly once, plus an optional return leg.
pub(super) fn construct_tour(problem: &RoutingProblem, round_trip: bool) -> Result<Tour, SolverError> {
    let destinations = problem.points.len() - 1;
    if destinations > MAX_EXACT_DESTINATIONS {
        return Err(SolverError::TooManyDestinations { actual: destinations, limit: MAX_EXACT_DESTINATIONS });
    }

    let matrix = DistanceMatrix::new(&problem.points);
    let (order, distance_km) = search_optimal_order(&matrix, destinations, round_trip)?;

    let mut stops = Vec::with_capacity(order.len() + 2);
    let mut track = Vec::with_capacity(order.len() + 2);

    stops.push(problem.names[0].clone());
    track.push(problem.points[0]);

    for index in order {
        stops.push(problem.names[index].clone());
        track.push(problem.points[index]);
    }

    if round_trip {
        stops.push(problem.names[0].clone());
        track.push(problem.points[0]);
    }

    Ok(Tour { stops, track, distance_km })
}

/// Runs dynamic programming over destination subsets. The origin is implicit in every
/// state: `best[mask * n + last]` keeps the minimum cost of a path which starts at the
/// origin, visits exactly the destinations in `mask` and ends at destination `last`
/// (matrix index `last + 1`). Transitions use strictly-less comparison, so on equal
/// costs the first transition found wins.
fn search_optimal_order(
    matrix: &DistanceMatrix,
    destinations: usize,
    round_trip: bool,
) -> Result<(Vec<usize>, f64), SolverError> {
    let n = destinations;
    let full = (1usize << n) - 1;

    let mut best = vec![f64::INFINITY; (full + 1) * n];
    let mut predecessors = vec![NO_PREDECESSOR; (full + 1) * n];

    for first in 0..n {
        best[(1 << first) * n + first] = matrix.get(0, first + 1);
    }

    for mask in 1..=full {
        for last in (0..n).filter(|&last| mask & (1 << last) != 0) {
            let cost = best[mask * n + last];
            if !cost.is_finite() {
                continue;
            }

            for next in (0..n).filter(|&next| mask & (1 << next) == 0) {
                let candidate = cost + matrix.get(last + 1, next + 1);
                let state = (mask | (1 << next)) * n + next;

                if candidate < best[state] {
                    best[state] = candidate;
                    predecessors[state] = last as u8;
                }
            }
        }
    }

    // pick the final destination minimizing the total, including the return leg if requested
    let mut end: Option<(usize, f64)> = None;
    for last in 0..n {
        let cost = best[full * n + last];
        if !cost.is_finite() {
            continue;
        }

        let total = if round_trip { cost + matrix.get(last + 1, 0) } else { cost };
        if end.is_none_or(|(_, best_total)| total < best_total) {
            end = Some((last, total));
        }
    }

    // cannot happen for n >= 1 given the construction above, but must be reported
    // rather than producing a silently wrong answer
    let Some((mut last, total)) = end else {
        return Err(SolverError::NoOptimalSolution);
    };

    let mut order = Vec::with_capacity(n);
    let mut mask = full;
    loop {
        order.push(last + 1);
        let predecessor = predecessors[mask * n + last];
        mask &= !(1 << last);

        if predecessor == NO_PREDECESSOR {
            break;
        }
        last = predecessor as usize;
    }
    order.reverse();

    Ok((order, total))
}
