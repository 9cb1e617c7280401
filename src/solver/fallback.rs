//! Permutation-driven fallback for large destination sets.
//!
//! # Algorithm
//!
//! The exact search branches on the fronts of the travelers in list
//! order, so that order decides which part of the search space is
//! explored first. When the destination set is too large to exhaust, the
//! fallback reruns the deadline-bounded exact search once per permutation
//! of the traveler list, each run granted an equal slice `budget / n!` of
//! the total budget and seeded with the best route of the runs before it.
//! Permuting travelers rather than destinations keeps every traveler's
//! internal order intact while still moving the search's entry points
//! around.
//!
//! An aggregate deadline caps the whole loop: no run is granted more than
//! the overall time left, and the loop ends as soon as the overall budget
//! is gone or the permutations are exhausted.

use std::time::Duration;

use log::debug;

use super::{Deadline, RouteSearch};
use crate::distance::DistanceMatrix;
use crate::models::SearchOutcome;

/// Searches for a good route by cycling through traveler orders.
///
/// Always reports `exact = false`: a route found this way is not proven
/// shortest, only the best one encountered across the attempted orders.
/// With a zero budget every slice is empty and the result carries no
/// route at all.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sightseer::distance::DistanceMatrix;
/// use sightseer::solver::permuted_search;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 5.0,
///     1.0, 0.0, 2.0,
///     5.0, 2.0, 0.0,
/// ]).unwrap();
/// let travelers = vec![vec![1], vec![2]];
///
/// let outcome = permuted_search(&dm, &travelers, 0, Duration::from_secs(2));
/// assert!(!outcome.exact);
/// assert_eq!(outcome.route.unwrap().length(), 8.0);
/// ```
pub fn permuted_search(
    matrix: &DistanceMatrix,
    travelers: &[Vec<usize>],
    origin: usize,
    budget: Duration,
) -> SearchOutcome {
    let overall = Deadline::start(budget);
    let permutations = factorial(travelers.len());
    let slice = budget.div_f64(permutations);

    let mut order: Vec<usize> = (0..travelers.len()).collect();
    let mut best = None;
    let mut attempt: u64 = 0;

    loop {
        attempt += 1;
        let permuted: Vec<Vec<usize>> = order.iter().map(|&i| travelers[i].clone()).collect();

        let deadline = Deadline::start(slice.min(overall.remaining()));
        let outcome = RouteSearch::new(matrix, &permuted, origin)
            .with_incumbent(best)
            .run(&deadline);
        best = outcome.route;

        if !outcome.exact {
            debug!(
                "time slice over, trying the next traveler order ({} of {:.0})",
                attempt, permutations
            );
        }

        if overall.expired() || !next_permutation(&mut order) {
            break;
        }
    }

    SearchOutcome {
        route: best,
        exact: false,
    }
}

/// n! as a float. Saturates to infinity for large n, which turns the
/// per-permutation slice into zero instead of overflowing.
fn factorial(n: usize) -> f64 {
    (1..=n).fold(1.0, |acc, i| acc * i as f64)
}

/// Advances `items` to the lexicographically next permutation in place.
///
/// Returns `false`, leaving `items` untouched, once it already holds the
/// last (descending) permutation. Starting from ascending order, repeated
/// calls enumerate all n! permutations in the same order Python's
/// `itertools.permutations` yields them.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let mut partner = items.len() - 1;
    while items[partner] <= items[pivot - 1] {
        partner -= 1;
    }
    items.swap(pivot - 1, partner);
    items[pivot..].reverse();
    true
}
