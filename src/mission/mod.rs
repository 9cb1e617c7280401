//! Mission sheet input.
//!
//! Passenger missions are pasted into a small tab-separated sheet; this
//! module turns it into the origin system and the per-traveler
//! destination lists the rest of the program works with.

mod parse;

pub use parse::{load, parse, MissionError, Missions};
