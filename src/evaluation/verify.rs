//! Route length recomputation and mission-contract checking.

use crate::distance::DistanceMatrix;
use crate::models::Route;

/// A way a route can fail its mission contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The route does not both start and end at the origin.
    NotClosed {
        /// Index of the expected origin system.
        origin: usize,
    },
    /// A required destination appears in the route but cannot be
    /// consumed in the traveler's required order.
    OrderViolated {
        /// Index of the affected traveler.
        traveler: usize,
        /// The first requirement left unconsumed.
        destination: usize,
    },
    /// A required destination never appears in the route.
    MissedDestination {
        /// Index of the affected traveler.
        traveler: usize,
        /// The destination that is missing.
        destination: usize,
    },
}

/// Sums the consecutive hop distances of a path.
///
/// The independent counterpart of the length the search tracks
/// incrementally. Paths with fewer than two stops have length zero.
///
/// # Examples
///
/// ```
/// use sightseer::distance::DistanceMatrix;
/// use sightseer::evaluation::path_length;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 3.0, 3.0, 0.0]).unwrap();
/// assert_eq!(path_length(&[0, 1, 0], &dm), 6.0);
/// assert_eq!(path_length(&[0], &dm), 0.0);
/// ```
pub fn path_length(stops: &[usize], matrix: &DistanceMatrix) -> f64 {
    stops
        .windows(2)
        .map(|pair| matrix.get(pair[0], pair[1]))
        .sum()
}

/// Checks a route against the origin and every traveler's requirements.
///
/// Walks the route once per traveler, consuming that traveler's
/// destinations front to back; a stop consumes at most one requirement
/// per traveler, mirroring how the search advances them. Returns every
/// violation found, or an empty list for a conforming route.
///
/// # Examples
///
/// ```
/// use sightseer::evaluation::verify_route;
/// use sightseer::models::Route;
///
/// let travelers = vec![vec![1], vec![2]];
/// let route = Route::new(vec![0, 1, 2, 0], 8.0);
/// assert!(verify_route(&route, &travelers, 0).is_empty());
/// ```
pub fn verify_route(route: &Route, travelers: &[Vec<usize>], origin: usize) -> Vec<Violation> {
    let mut violations = Vec::new();
    let stops = route.stops();

    let closed =
        stops.len() >= 2 && stops.first() == Some(&origin) && stops.last() == Some(&origin);
    if !closed {
        violations.push(Violation::NotClosed { origin });
    }

    for (index, traveler) in travelers.iter().enumerate() {
        let mut cursor = 0;
        for stop in stops {
            if traveler.get(cursor) == Some(stop) {
                cursor += 1;
            }
        }
        if let Some(&destination) = traveler.get(cursor) {
            let violation = if stops.contains(&destination) {
                Violation::OrderViolated {
                    traveler: index,
                    destination,
                }
            } else {
                Violation::MissedDestination {
                    traveler: index,
                    destination,
                }
            };
            violations.push(violation);
        }
    }

    violations
}
