//! Step-pattern selection and the transition tables behind each variant.

use std::fmt;

/// One allowed predecessor move into cell `(m, n)`.
///
/// The predecessor is `(m - rows_back, n - cols_back)`. `length_step` is what
/// the move adds to the path-length ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Reference rows moved back.
    pub rows_back: usize,
    /// Query columns moved back.
    pub cols_back: usize,
    /// Increment applied to the predecessor's path length.
    pub length_step: usize,
}

impl Transition {
    const fn new(rows_back: usize, cols_back: usize, length_step: usize) -> Self {
        Self {
            rows_back,
            cols_back,
            length_step,
        }
    }

    /// Return the predecessor of `(row, col)`, or `None` if it would leave the matrix.
    #[must_use]
    pub fn predecessor(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        Some((row.checked_sub(self.rows_back)?, col.checked_sub(self.cols_back)?))
    }
}

pub(crate) const DIAGONAL: Transition = Transition::new(1, 1, 1);
pub(crate) const VERTICAL: Transition = Transition::new(1, 0, 1);
pub(crate) const HORIZONTAL: Transition = Transition::new(0, 1, 1);

const CLASSIC: [Transition; 3] = [DIAGONAL, VERTICAL, HORIZONTAL];
const ONLINE: [Transition; 3] = [VERTICAL, DIAGONAL, HORIZONTAL];
const THREE_ROW_SKIP: [Transition; 4] = [
    Transition::new(3, 1, 1),
    Transition::new(2, 1, 1),
    DIAGONAL,
    HORIZONTAL,
];
// Column 1 has no two-column lookback; the diagonal there is booked as two
// query columns consumed.
const TWO_COLUMN_SKIP_FIRST: [Transition; 2] = [Transition::new(1, 1, 2), VERTICAL];
const TWO_COLUMN_SKIP: [Transition; 3] = [Transition::new(1, 2, 2), DIAGONAL, VERTICAL];

/// DTW step-pattern variant.
///
/// | Variant | Moves (tie-break order) | Length step | Origin tracked |
/// |---|---|---|---|
/// | `Classic` | diagonal, vertical, horizontal | 1 | no |
/// | `Online` | vertical, diagonal, horizontal (length-normalized choice) | 1 | yes |
/// | `ThreeRowSkip` | 3, 2, 1, 0 rows back, one column back | 1 | yes |
/// | `TwoColumnSkip` | 2, 1, 0 columns back, one row back | 2 for two-column moves, else 1 | yes |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepPattern {
    /// Three-neighbour DTW, normalized by path length only after the sweep.
    #[default]
    Classic,
    /// Three-neighbour DTW choosing the predecessor with the lowest average cost.
    Online,
    /// Non-segmental DTW whose moves may skip up to three reference rows.
    ThreeRowSkip,
    /// Non-segmental DTW whose moves may skip up to two query columns.
    TwoColumnSkip,
}

impl StepPattern {
    /// Every variant, in declaration order.
    pub const ALL: [StepPattern; 4] = [
        StepPattern::Classic,
        StepPattern::Online,
        StepPattern::ThreeRowSkip,
        StepPattern::TwoColumnSkip,
    ];

    /// Return the smallest number of reference rows this pattern accepts.
    #[must_use]
    pub fn min_rows(self) -> usize {
        match self {
            Self::ThreeRowSkip => 3,
            Self::Classic | Self::Online | Self::TwoColumnSkip => 1,
        }
    }

    /// Return how many top rows are filled by pure horizontal accumulation.
    ///
    /// These rows sit above the reach of the interior recurrence's lookback.
    #[must_use]
    pub fn boundary_rows(self) -> usize {
        match self {
            Self::ThreeRowSkip => 3,
            Self::Classic | Self::Online | Self::TwoColumnSkip => 1,
        }
    }

    /// Return the first row evaluated by the interior recurrence.
    #[must_use]
    pub fn first_interior_row(self) -> usize {
        self.boundary_rows()
    }

    /// Return true if this pattern produces an origin-row matrix.
    #[must_use]
    pub fn tracks_origin(self) -> bool {
        !matches!(self, Self::Classic)
    }

    /// Return the ordered transition set for interior cells in column `col`.
    ///
    /// Earlier entries win ties. Only meaningful for `col >= 1`; column 0 is
    /// always seeded by the boundary.
    #[must_use]
    pub fn transitions(self, col: usize) -> &'static [Transition] {
        match self {
            Self::Classic => &CLASSIC,
            Self::Online => &ONLINE,
            Self::ThreeRowSkip => &THREE_ROW_SKIP,
            Self::TwoColumnSkip if col == 1 => &TWO_COLUMN_SKIP_FIRST,
            Self::TwoColumnSkip => &TWO_COLUMN_SKIP,
        }
    }

    /// Return true if candidates are compared by average cost per path step.
    #[must_use]
    pub fn normalizes_candidates(self) -> bool {
        matches!(self, Self::Online)
    }
}

impl fmt::Display for StepPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Classic => "classic DTW",
            Self::Online => "online DTW",
            Self::ThreeRowSkip => "three-row-skip NSDTW",
            Self::TwoColumnSkip => "two-column-skip NSDTW",
        };
        f.write_str(name)
    }
}
