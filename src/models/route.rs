//! Route and search outcome types.

/// A closed sightseeing route over interned system indices.
///
/// The first and last stop are both the origin. The same index may appear
/// more than once in between: revisiting a system can be cheaper than
/// postponing one traveler's next destination.
///
/// # Examples
///
/// ```
/// use sightseer::models::Route;
///
/// let route = Route::new(vec![0, 2, 1, 0], 8.0);
/// assert_eq!(route.stops(), &[0, 2, 1, 0]);
/// assert_eq!(route.length(), 8.0);
/// assert_eq!(route.num_hops(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    stops: Vec<usize>,
    length: f64,
}

impl Route {
    /// Creates a route from its ordered stops and total length.
    pub fn new(stops: Vec<usize>, length: f64) -> Self {
        Self { stops, length }
    }

    /// The ordered stop indices, origin first and last.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Total route length (sum over consecutive stop pairs).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of hops, i.e. one less than the number of stops.
    pub fn num_hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

/// The result of one solver invocation.
///
/// `route` is `None` when the deadline expired before any complete route
/// was found. `exact` is `true` only when the branch-and-bound search ran
/// to completion, in which case the route is provably shortest; a route
/// produced under an expired deadline or by the permutation fallback is
/// best-effort.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Best route found, if any complete route was reached in time.
    pub route: Option<Route>,
    /// Whether the result is provably optimal.
    pub exact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_accessors() {
        let route = Route::new(vec![0, 1, 2, 0], 12.5);
        assert_eq!(route.stops(), &[0, 1, 2, 0]);
        assert_eq!(route.length(), 12.5);
        assert_eq!(route.num_hops(), 3);
    }

    #[test]
    fn test_trivial_route() {
        let route = Route::new(vec![0, 0], 0.0);
        assert_eq!(route.num_hops(), 1);
        assert_eq!(route.length(), 0.0);
    }

    #[test]
    fn test_outcome_equality() {
        let a = SearchOutcome {
            route: Some(Route::new(vec![0, 1, 0], 2.0)),
            exact: true,
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
