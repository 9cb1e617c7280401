//! Route search: exact branch-and-bound with a permutation fallback.
//!
//! - [`solve`]: strategy selection between the two searches
//! - [`RouteSearch`]: deadline-bounded exact branch-and-bound
//! - [`permuted_search`]: time-sliced searches over permuted traveler orders
//! - [`Deadline`]: the monotonic budget both searches run under

mod deadline;
mod fallback;
mod search;

pub use deadline::Deadline;
pub use fallback::permuted_search;
pub use search::RouteSearch;

use std::time::Duration;

use log::info;

use crate::distance::DistanceMatrix;
use crate::models::SearchOutcome;

/// Largest number of distinct destinations the exact search takes on.
///
/// Determined empirically: at 12 destinations the exact enumeration
/// finishes in about a minute, and every further destination multiplies
/// the work.
pub const EXACT_SEARCH_LIMIT: usize = 12;

/// Finds the shortest closed route from `origin` through every traveler's
/// destinations, preserving each traveler's internal visiting order.
///
/// With at most [`EXACT_SEARCH_LIMIT`] distinct destinations the exact
/// search runs once under the full budget; its result is optimal unless
/// the deadline cut it short, which the outcome's `exact` flag reports.
/// Past the limit [`permuted_search`] takes over and the result is
/// best-effort by construction.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sightseer::distance::DistanceMatrix;
/// use sightseer::models::Coords;
/// use sightseer::solver::solve;
///
/// let coords = vec![
///     Coords::new(0.0, 0.0, 0.0),
///     Coords::new(10.0, 0.0, 0.0),
///     Coords::new(20.0, 0.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_coords(&coords);
/// let travelers = vec![vec![1, 2]];
///
/// let outcome = solve(&dm, &travelers, 0, Duration::from_secs(5));
/// let route = outcome.route.unwrap();
/// assert!(outcome.exact);
/// assert_eq!(route.stops(), &[0, 1, 2, 0]);
/// assert!((route.length() - 40.0).abs() < 1e-10);
/// ```
pub fn solve(
    matrix: &DistanceMatrix,
    travelers: &[Vec<usize>],
    origin: usize,
    budget: Duration,
) -> SearchOutcome {
    let distinct = count_distinct_destinations(travelers, origin);
    if distinct <= EXACT_SEARCH_LIMIT {
        info!(
            "{} distinct destinations, calculating the exact solution",
            distinct
        );
        let deadline = Deadline::start(budget);
        RouteSearch::new(matrix, travelers, origin).run(&deadline)
    } else {
        info!(
            "{} distinct destinations is too many for an exact search, \
             calculating a good enough route instead",
            distinct
        );
        permuted_search(matrix, travelers, origin, budget)
    }
}

/// Number of distinct destinations across all travelers, origin excluded.
fn count_distinct_destinations(travelers: &[Vec<usize>], origin: usize) -> usize {
    let mut seen: Vec<usize> = Vec::new();
    for traveler in travelers {
        for &destination in traveler {
            if destination != origin && !seen.contains(&destination) {
                seen.push(destination);
            }
        }
    }
    seen.len()
}
