//! Deadline-bounded branch-and-bound route search.
//!
//! # Algorithm
//!
//! Depth-first enumeration over states of the form (partial path,
//! per-traveler progress). The moves out of a state are the distinct
//! "front" destinations: the next still-unvisited destination of each
//! traveler, iterated in traveler order. Visiting a front advances every
//! traveler whose front is that same system, so one stop can serve
//! several missions at once, and a system may be visited again later if
//! another traveler needs it a second time.
//!
//! Each branch is bounded by its closed length, the partial path plus the
//! hop back to the origin. A branch whose closed length already exceeds
//! the best complete route found so far is cut without recursing; on
//! metric distances (the Euclidean case) appending stops never shortens
//! the closed length, so the cut is lossless. The deadline is sampled at
//! the top of every branch iteration, and once it expires the abort
//! unwinds through every open recursion level.
//!
//! # Complexity
//!
//! Factorial in the number of visits of the final route, heavily cut in
//! practice by the length bound.

use log::info;

use super::Deadline;
use crate::distance::DistanceMatrix;
use crate::models::{Route, SearchOutcome};

/// Exact search over all order-respecting routes.
///
/// One instance runs one search. The path and the per-traveler cursors
/// are mutated in place on the way down and restored on the way back up;
/// the only state that survives a branch is the incumbent, the best
/// complete route seen so far, which both bounds the remaining search and
/// becomes the result.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sightseer::distance::DistanceMatrix;
/// use sightseer::solver::{Deadline, RouteSearch};
///
/// // Origin 0, destinations 1 and 2, one traveler for each.
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 5.0,
///     1.0, 0.0, 2.0,
///     5.0, 2.0, 0.0,
/// ]).unwrap();
/// let travelers = vec![vec![1], vec![2]];
///
/// let deadline = Deadline::start(Duration::from_secs(5));
/// let outcome = RouteSearch::new(&dm, &travelers, 0).run(&deadline);
///
/// let route = outcome.route.unwrap();
/// assert_eq!(route.length(), 8.0);
/// assert!(outcome.exact);
/// ```
pub struct RouteSearch<'a> {
    matrix: &'a DistanceMatrix,
    travelers: &'a [Vec<usize>],
    origin: usize,
    /// Per-traveler progress: how many of its destinations are consumed.
    cursors: Vec<usize>,
    /// Partial path, origin first; the closing origin is not stored.
    path: Vec<usize>,
    /// Journal of traveler indices advanced on the way down.
    undo: Vec<usize>,
    best: Option<Route>,
}

impl<'a> RouteSearch<'a> {
    /// Creates a search over the given travelers.
    ///
    /// `travelers` holds each traveler's destination indices in required
    /// visiting order; `origin` is the index of the start and end system.
    /// All indices must be within the matrix.
    pub fn new(matrix: &'a DistanceMatrix, travelers: &'a [Vec<usize>], origin: usize) -> Self {
        Self {
            matrix,
            travelers,
            origin,
            cursors: vec![0; travelers.len()],
            path: vec![origin],
            undo: Vec::new(),
            best: None,
        }
    }

    /// Seeds the search with a route found earlier.
    ///
    /// The incumbent bounds the search from the first branch on and is
    /// returned unchanged if nothing shorter is found.
    pub fn with_incumbent(mut self, incumbent: Option<Route>) -> Self {
        self.best = incumbent;
        self
    }

    /// Runs the search until exhaustion or until the deadline expires.
    ///
    /// The outcome's `exact` flag is `true` only if the search space was
    /// exhausted before the deadline.
    pub fn run(mut self, deadline: &Deadline) -> SearchOutcome {
        let aborted = self.explore(self.origin, 0.0, deadline);
        SearchOutcome {
            route: self.best,
            exact: !aborted,
        }
    }

    /// Recursive branch step. `last` is the path's current tail stop and
    /// `open_len` the length up to it. Returns `true` if the deadline
    /// expired somewhere below, aborting the whole search.
    fn explore(&mut self, last: usize, open_len: f64, deadline: &Deadline) -> bool {
        if self.all_consumed() {
            self.try_record(open_len + self.matrix.get(last, self.origin));
            return false;
        }

        for next in self.candidates() {
            if deadline.expired() {
                return true;
            }

            let hop = self.matrix.get(last, next);
            let closed = open_len + hop + self.matrix.get(next, self.origin);
            if let Some(best) = &self.best {
                if closed > best.length() {
                    continue;
                }
            }

            let advanced = self.advance(next);
            self.path.push(next);

            let aborted = self.explore(next, open_len + hop, deadline);

            self.path.pop();
            self.retreat(advanced);

            if aborted {
                return true;
            }
        }
        false
    }

    /// The distinct front destinations, in traveler order.
    fn candidates(&self) -> Vec<usize> {
        let mut fronts = Vec::with_capacity(self.travelers.len());
        for (traveler, &cursor) in self.travelers.iter().zip(&self.cursors) {
            if let Some(&front) = traveler.get(cursor) {
                if !fronts.contains(&front) {
                    fronts.push(front);
                }
            }
        }
        fronts
    }

    /// Consumes `next` as the front of every traveler currently waiting
    /// for it. Returns the number of journal entries to undo.
    fn advance(&mut self, next: usize) -> usize {
        let mut count = 0;
        for (i, traveler) in self.travelers.iter().enumerate() {
            if traveler.get(self.cursors[i]) == Some(&next) {
                self.cursors[i] += 1;
                self.undo.push(i);
                count += 1;
            }
        }
        count
    }

    /// Rolls back the last `count` cursor advances.
    fn retreat(&mut self, count: usize) {
        let keep = self.undo.len() - count;
        for i in self.undo.drain(keep..) {
            self.cursors[i] -= 1;
        }
    }

    fn all_consumed(&self) -> bool {
        self.travelers
            .iter()
            .zip(&self.cursors)
            .all(|(traveler, &cursor)| cursor >= traveler.len())
    }

    /// Replaces the incumbent if the completed path closes shorter.
    fn try_record(&mut self, closed: f64) {
        let improved = match &self.best {
            Some(best) => closed < best.length(),
            None => true,
        };
        if improved {
            let mut stops = self.path.clone();
            stops.push(self.origin);
            info!("shortest route so far: {:.2} ly, continuing to search", closed);
            self.best = Some(Route::new(stops, closed));
        }
    }
}
