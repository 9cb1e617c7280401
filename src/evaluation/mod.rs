//! Independent checking of solver output.
//!
//! The search tracks route lengths incrementally; this module recomputes
//! them from scratch and checks the mission contract, so the driver and
//! the tests can cross-examine a route without trusting the search
//! internals.

mod verify;

pub use verify::{path_length, verify_route, Violation};
