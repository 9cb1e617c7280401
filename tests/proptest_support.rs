//! Shared helpers for the property-based tests.

use proptest::collection::vec;
use proptest::prelude::*;

use sightseer::distance::DistanceMatrix;
use sightseer::evaluation::verify_route;
use sightseer::models::{Coords, Route};

/// Strategy for a single system coordinate in a 1000 ly cube.
pub fn coords_strategy() -> impl Strategy<Value = Coords> {
    (-500.0f64..500.0, -500.0f64..500.0, -500.0f64..500.0)
        .prop_map(|(x, y, z)| Coords::new(x, y, z))
}

/// Strategy for a random mission instance: system coordinates (index 0 is
/// the origin) and traveler destination sequences drawn from the non-origin
/// systems. Destinations may repeat and may be shared between travelers.
pub fn instance_strategy(
    max_systems: usize,
    max_travelers: usize,
    max_stops: usize,
) -> impl Strategy<Value = (Vec<Coords>, Vec<Vec<usize>>)> {
    (2..=max_systems).prop_flat_map(move |size| {
        (
            vec(coords_strategy(), size),
            vec(vec(1..size, 1..=max_stops), 1..=max_travelers),
        )
    })
}

/// Shortest closed route length by exhaustive enumeration, without any
/// pruning. Only usable for small instances; serves as the oracle the
/// branch-and-bound search is checked against.
pub fn brute_force_shortest(
    matrix: &DistanceMatrix,
    travelers: &[Vec<usize>],
    origin: usize,
) -> Option<f64> {
    let mut cursors = vec![0usize; travelers.len()];
    enumerate(matrix, travelers, origin, &mut cursors, origin, 0.0)
}

fn enumerate(
    matrix: &DistanceMatrix,
    travelers: &[Vec<usize>],
    origin: usize,
    cursors: &mut Vec<usize>,
    last: usize,
    open: f64,
) -> Option<f64> {
    if travelers
        .iter()
        .zip(cursors.iter())
        .all(|(traveler, &cursor)| cursor >= traveler.len())
    {
        return Some(open + matrix.get(last, origin));
    }

    let mut best: Option<f64> = None;
    let mut tried: Vec<usize> = Vec::new();
    for i in 0..travelers.len() {
        if cursors[i] >= travelers[i].len() {
            continue;
        }
        let next = travelers[i][cursors[i]];
        if tried.contains(&next) {
            continue;
        }
        tried.push(next);

        let mut advanced = Vec::new();
        for (j, traveler) in travelers.iter().enumerate() {
            if cursors[j] < traveler.len() && traveler[cursors[j]] == next {
                cursors[j] += 1;
                advanced.push(j);
            }
        }
        let sub = enumerate(
            matrix,
            travelers,
            origin,
            cursors,
            next,
            open + matrix.get(last, next),
        );
        for &j in &advanced {
            cursors[j] -= 1;
        }

        if let Some(length) = sub {
            best = Some(match best {
                Some(current) if current <= length => current,
                _ => length,
            });
        }
    }
    best
}

/// Asserts that a route satisfies every mission contract.
///
/// Returns a `Result` suitable for use with `prop_assert!` so failures
/// shrink instead of panicking.
pub fn assert_route_satisfies_missions(
    route: &Route,
    travelers: &[Vec<usize>],
    origin: usize,
) -> Result<(), proptest::test_runner::TestCaseError> {
    let violations = verify_route(route, travelers, origin);
    prop_assert!(
        violations.is_empty(),
        "route {:?} violates missions {:?}: {:?}",
        route.stops(),
        travelers,
        violations
    );
    Ok(())
}
