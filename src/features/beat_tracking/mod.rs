//! Beat grid construction
//!
//! Turns the estimated tempo and the raw onset list into a phase-aligned
//! beat grid pruned to points with onset support.

pub mod grid;
