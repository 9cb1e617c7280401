//! System interning and the distance matrix.
//!
//! Mission data names systems by string; everything past the driver works
//! on dense indices. [`SystemIndex`] hands those indices out and
//! [`DistanceMatrix`] stores the precomputed pairwise distances behind
//! them.

mod index;
mod matrix;

pub use index::SystemIndex;
pub use matrix::DistanceMatrix;
