//! Local-cost matrix types with shape validation.

use crate::error::DtwError;
use crate::grid::Grid;

/// Owned, shape-validated local-cost matrix.
///
/// Row `m` indexes the reference sequence and column `n` the query sequence.
/// Guaranteed to have at least one row and one column. Values are not
/// inspected: NaN and infinities are carried into the recurrence unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalCostMatrix(Grid<f64>);

impl LocalCostMatrix {
    /// Build a matrix from one vector per reference row.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptyMatrix`] | No rows, or the first row is empty |
    /// | [`DtwError::RaggedRows`] | A row's length differs from row 0 |
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DtwError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        check_non_empty(n_rows, n_cols)?;
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != n_cols)
        {
            return Err(DtwError::RaggedRows {
                row,
                expected: n_cols,
                found,
            });
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self(Grid::from_raw(n_rows, n_cols, data)))
    }

    /// Build a matrix from a row-major buffer: cell `(m, n)` at `values[m * cols + n]`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptyMatrix`] | `rows == 0` or `cols == 0` |
    /// | [`DtwError::ShapeMismatch`] | `values.len() != rows * cols` |
    pub fn from_row_major(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, DtwError> {
        check_shape(rows, cols, values.len())?;
        Ok(Self(Grid::from_raw(rows, cols, values)))
    }

    /// Build a matrix from a column-major buffer: cell `(m, n)` at `values[m + rows * n]`.
    ///
    /// This is the layout numeric hosts such as MATLAB hand over.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptyMatrix`] | `rows == 0` or `cols == 0` |
    /// | [`DtwError::ShapeMismatch`] | `values.len() != rows * cols` |
    pub fn from_column_major(rows: usize, cols: usize, values: &[f64]) -> Result<Self, DtwError> {
        check_shape(rows, cols, values.len())?;
        let data = (0..rows)
            .flat_map(|m| (0..cols).map(move |n| values[m + rows * n]))
            .collect();
        Ok(Self(Grid::from_raw(rows, cols, data)))
    }

    /// Borrow this matrix as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> LocalCostView<'_> {
        LocalCostView {
            rows: self.0.rows(),
            cols: self.0.cols(),
            data: self.0.as_slice(),
        }
    }

    /// Return the number of reference rows (M).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.0.rows()
    }

    /// Return the number of query columns (N).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.0.cols()
    }

    /// Return the local cost at `(row, col)`, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.0.get(row, col).copied()
    }

    /// Consume and return the underlying grid.
    #[must_use]
    pub fn into_grid(self) -> Grid<f64> {
        self.0
    }
}

impl TryFrom<Vec<Vec<f64>>> for LocalCostMatrix {
    type Error = DtwError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

/// Borrowed, shape-validated view of a row-major local-cost buffer.
#[derive(Debug, Clone, Copy)]
pub struct LocalCostView<'a> {
    rows: usize,
    cols: usize,
    data: &'a [f64],
}

impl<'a> LocalCostView<'a> {
    /// Create a view over a row-major buffer without copying it.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptyMatrix`] | `rows == 0` or `cols == 0` |
    /// | [`DtwError::ShapeMismatch`] | `data.len() != rows * cols` |
    pub fn new(rows: usize, cols: usize, data: &'a [f64]) -> Result<Self, DtwError> {
        check_shape(rows, cols, data.len())?;
        Ok(Self { rows, cols, data })
    }

    /// Return the number of reference rows (M).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of query columns (N).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the local cost at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the matrix.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} local-cost matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Return the underlying row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }
}

fn check_non_empty(rows: usize, cols: usize) -> Result<(), DtwError> {
    if rows == 0 || cols == 0 {
        return Err(DtwError::EmptyMatrix { rows, cols });
    }
    Ok(())
}

fn check_shape(rows: usize, cols: usize, len: usize) -> Result<(), DtwError> {
    check_non_empty(rows, cols)?;
    if rows.checked_mul(cols) != Some(len) {
        return Err(DtwError::ShapeMismatch { rows, cols, len });
    }
    Ok(())
}
