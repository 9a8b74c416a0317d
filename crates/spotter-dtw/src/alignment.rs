//! Results of a DTW sweep.

use crate::distance::NormalizedDistance;
use crate::endpoint::RowBase;
use crate::grid::Grid;
use crate::pattern::StepPattern;

/// Scalar outcome of one computation: normalized distance and end row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Accumulated cost at the endpoint divided by its path length.
    pub distance: NormalizedDistance,
    /// End row in the engine's reporting convention.
    pub end_row: usize,
}

/// Full outcome of one DTW computation.
///
/// Exposes every table the sweep produced so a separate backtracking component
/// can walk them together with [`StepPattern::transitions`].
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub(crate) pattern: StepPattern,
    pub(crate) row_base: RowBase,
    pub(crate) accumulated: Grid<f64>,
    pub(crate) lengths: Grid<usize>,
    pub(crate) origins: Option<Grid<usize>>,
    pub(crate) end_row: usize,
    pub(crate) distance: NormalizedDistance,
}

impl Alignment {
    /// Return the step pattern that produced this alignment.
    #[must_use]
    pub fn pattern(&self) -> StepPattern {
        self.pattern
    }

    /// Return the accumulated-cost matrix.
    #[must_use]
    pub fn accumulated(&self) -> &Grid<f64> {
        &self.accumulated
    }

    /// Return the path-length matrix.
    #[must_use]
    pub fn path_lengths(&self) -> &Grid<usize> {
        &self.lengths
    }

    /// Return the origin-row matrix (0-based rows), or `None` for
    /// [`StepPattern::Classic`].
    #[must_use]
    pub fn origins(&self) -> Option<&Grid<usize>> {
        self.origins.as_ref()
    }

    /// Return the normalized distance at the endpoint.
    #[must_use]
    pub fn distance(&self) -> NormalizedDistance {
        self.distance
    }

    /// Return the end row in the configured reporting convention.
    #[must_use]
    pub fn end_row(&self) -> usize {
        self.row_base.report(self.end_row)
    }

    /// Return the 0-based end row regardless of reporting convention.
    #[must_use]
    pub fn end_row_index(&self) -> usize {
        self.end_row
    }

    /// Return the endpoint cell `(row, col)` with 0-based coordinates.
    #[must_use]
    pub fn endpoint(&self) -> (usize, usize) {
        (self.end_row, self.accumulated.cols() - 1)
    }

    /// Return the row the winning path started on, in the reporting convention.
    ///
    /// `None` when the pattern does not track origins.
    #[must_use]
    pub fn origin_row(&self) -> Option<usize> {
        let origins = self.origins.as_ref()?;
        Some(self.row_base.report(origins[self.endpoint()]))
    }

    /// Return the path length stored at the endpoint.
    #[must_use]
    pub fn path_length(&self) -> usize {
        self.lengths[self.endpoint()]
    }

    /// Return the scalar score.
    #[must_use]
    pub fn score(&self) -> Score {
        Score {
            distance: self.distance,
            end_row: self.end_row(),
        }
    }
}

/// One entry of a ranked batch: which input matrix, and how well it matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMatch {
    /// Position of the matrix in the slice passed to [`crate::Dtw::rank`].
    pub index: usize,
    /// Score of that matrix.
    pub score: Score,
}
