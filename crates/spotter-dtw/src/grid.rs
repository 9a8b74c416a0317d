//! Dense row-major 2-D container used for every DTW table.

use std::ops::{Index, IndexMut};

/// Dense `rows x cols` grid stored as a row-major flat vector.
///
/// Cell `(row, col)` lives at `data[row * cols + col]`. Access through
/// [`get`][Grid::get] is bounds-checked and returns `None` outside the grid;
/// the [`Index`] impl panics with the offending coordinates instead of
/// silently aliasing a neighbouring row.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub(crate) fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    /// Copy the grid out as one `Vec` per row.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }
}

impl<T> Grid<T> {
    /// Wrap an existing row-major buffer. Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Return the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Return the cell at `(row, col)`, or `None` when outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Return one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of bounds for grid with {} rows", self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over one column from top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col >= cols`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        assert!(col < self.cols, "column {col} out of bounds for grid with {} columns", self.cols);
        self.data.iter().skip(col).step_by(self.cols)
    }

    /// Return the underlying row-major buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let idx = self.offset(row, col);
        &mut self.data[idx]
    }
}
