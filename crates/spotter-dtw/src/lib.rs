//! Step-pattern DTW scoring over precomputed local-cost matrices.
//!
//! Pure math library with no I/O. Given an M×N local-cost matrix (rows index
//! the reference sequence, columns the query), computes the accumulated-cost,
//! path-length and origin-row tables under one of four step patterns, selects
//! the best end row in the last column, and reports the length-normalized
//! distance there. Explicit path backtracking is left to the caller, who gets
//! every table plus the transition sets needed to walk them.

mod alignment;
mod boundary;
mod candidate;
mod cost;
mod distance;
mod dtw;
mod endpoint;
mod error;
mod grid;
mod pattern;
mod policy;
mod tables;

pub use alignment::{Alignment, RankedMatch, Score};
pub use boundary::StartMode;
pub use cost::{LocalCostMatrix, LocalCostView};
pub use distance::NormalizedDistance;
pub use dtw::Dtw;
pub use endpoint::RowBase;
pub use error::DtwError;
pub use grid::Grid;
pub use pattern::{StepPattern, Transition};
