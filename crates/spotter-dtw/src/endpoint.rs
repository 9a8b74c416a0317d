//! Endpoint selection over the last query column.

use crate::grid::Grid;

/// Row-numbering convention for externally reported row indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowBase {
    /// Rows are reported as 0-based indices.
    #[default]
    Zero,
    /// Rows are reported as natural 1-based row numbers.
    One,
}

impl RowBase {
    /// Convert an internal 0-based row index to this convention.
    #[must_use]
    pub fn report(self, row: usize) -> usize {
        match self {
            Self::Zero => row,
            Self::One => row + 1,
        }
    }
}

/// Return the row of the first strict minimum in the last column of `acc`.
///
/// Rows are scanned top to bottom and a later value replaces the running
/// minimum only when strictly smaller, so the lowest row wins ties.
pub(crate) fn select_end_row(acc: &Grid<f64>) -> usize {
    let last = acc.cols() - 1;
    let mut column = acc.column(last).enumerate();
    let Some((_, &first)) = column.next() else {
        return 0;
    };
    let mut best = (0, first);
    for (row, &value) in column {
        if value < best.1 {
            best = (row, value);
        }
    }
    best.0
}
