//! Working tables filled by one DTW sweep.

use crate::grid::Grid;
use crate::pattern::Transition;

/// Accumulated-cost, path-length and origin-row tables for one computation.
///
/// All three are allocated once at full size and each cell is written exactly
/// once during the sweep.
#[derive(Debug)]
pub(crate) struct Tables {
    pub(crate) acc: Grid<f64>,
    pub(crate) len: Grid<usize>,
    pub(crate) origin: Grid<usize>,
}

impl Tables {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            acc: Grid::filled(rows, cols, f64::NAN),
            len: Grid::filled(rows, cols, 0),
            origin: Grid::filled(rows, cols, 0),
        }
    }

    /// Write `cell` as the extension of `pred` by one move costing `local`.
    ///
    /// The origin tag is copied from the predecessor, never reset.
    pub(crate) fn extend(&mut self, cell: (usize, usize), pred: (usize, usize), step: &Transition, local: f64) {
        self.acc[cell] = self.acc[pred] + local;
        self.len[cell] = self.len[pred] + step.length_step;
        self.origin[cell] = self.origin[pred];
    }

    /// Write `cell` as the first cell of a path starting on `origin_row`.
    pub(crate) fn start(&mut self, cell: (usize, usize), local: f64, origin_row: usize) {
        self.acc[cell] = local;
        self.len[cell] = 1;
        self.origin[cell] = origin_row;
    }
}
