//! # sightseer
//!
//! Route planner for Elite Dangerous sightseeing missions: finds the
//! shortest closed route from a starting system through every destination
//! of every accepted mission, honoring the order in which each mission
//! visits its destinations.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Coords, Route, SearchOutcome)
//! - [`mission`]: Mission sheet parsing
//! - [`edsm`]: System coordinate lookup on the EDSM API
//! - [`distance`]: System name index and distance matrix
//! - [`solver`]: Exact branch-and-bound search and the permutation fallback
//! - [`evaluation`]: Route constraint checking
//! - [`error`]: CLI error type

pub mod distance;
pub mod edsm;
pub mod error;
pub mod evaluation;
pub mod mission;
pub mod models;
pub mod solver;
