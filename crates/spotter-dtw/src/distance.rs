//! Length-normalized distance newtype.

use std::cmp::Ordering;
use std::fmt;

/// Accumulated cost at an endpoint divided by the path length stored there.
///
/// May be non-finite when non-finite local costs reach the endpoint; that is a
/// valid, if degenerate, result.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NormalizedDistance(f64);

impl NormalizedDistance {
    /// Normalize `accumulated` by `path_length`.
    pub(crate) fn from_endpoint(accumulated: f64, path_length: usize) -> Self {
        Self(accumulated / path_length as f64)
    }

    /// Return the raw distance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Return true if the distance is neither NaN nor infinite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for NormalizedDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
