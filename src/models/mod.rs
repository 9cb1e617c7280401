//! Domain model types for sightseeing route planning.
//!
//! Provides the core abstractions: galactic coordinates as served by EDSM,
//! closed routes over interned system indices, and the outcome type the
//! solver hands back to callers.

mod coords;
mod route;

pub use coords::Coords;
pub use route::{Route, SearchOutcome};
