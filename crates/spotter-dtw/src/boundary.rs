//! Boundary initialization: column 0 and the horizontally filled top rows.

use crate::cost::LocalCostView;
use crate::pattern::{HORIZONTAL, VERTICAL};
use crate::tables::Tables;

/// Where alignment paths may begin in column 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartMode {
    /// Every path starts at `(0, 0)`; column 0 accumulates downwards and
    /// `len(m, 0) = m + 1`.
    #[default]
    Anchored,
    /// A path may start on any reference row: `acc(m, 0) = D(m, 0)`,
    /// `len(m, 0) = 1` and the origin tag of `(m, 0)` is `m`.
    Free,
}

/// Seed column 0 of every row according to `mode`.
pub(crate) fn seed_first_column(tables: &mut Tables, costs: LocalCostView<'_>, mode: StartMode) {
    tables.start((0, 0), costs.at(0, 0), 0);
    for m in 1..costs.rows() {
        let local = costs.at(m, 0);
        match mode {
            StartMode::Anchored => tables.extend((m, 0), (m - 1, 0), &VERTICAL, local),
            StartMode::Free => tables.start((m, 0), local, m),
        }
    }
}

/// Fill `row` from column 1 onwards by pure horizontal accumulation.
pub(crate) fn fill_boundary_row(tables: &mut Tables, costs: LocalCostView<'_>, row: usize) {
    for n in 1..costs.cols() {
        tables.extend((row, n), (row, n - 1), &HORIZONTAL, costs.at(row, n));
    }
}
