//! Coordinate acquisition from the EDSM API.

mod client;

pub use client::{EdsmClient, EdsmConfig, EdsmError, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
