//! DTW engine: the shared sweep driver, its configuration and batch scoring.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::alignment::{Alignment, RankedMatch, Score};
use crate::boundary::{StartMode, fill_boundary_row, seed_first_column};
use crate::cost::{LocalCostMatrix, LocalCostView};
use crate::distance::NormalizedDistance;
use crate::endpoint::{RowBase, select_end_row};
use crate::error::DtwError;
use crate::pattern::StepPattern;
use crate::policy::{Classic, Online, StepPolicy, ThreeRowSkip, TwoColumnSkip};
use crate::tables::Tables;

/// Immutable DTW configuration. Thread-safe and copyable.
///
/// Construct via [`Dtw::new`] (or a per-pattern shorthand), then chain
/// `with_*` methods to override defaults.
///
/// # Defaults
///
/// | Parameter    | Default                 |
/// |--------------|-------------------------|
/// | `pattern`    | `StepPattern::Classic`  |
/// | `start_mode` | `StartMode::Anchored`   |
/// | `row_base`   | `RowBase::Zero`         |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Dtw {
    pattern: StepPattern,
    start_mode: StartMode,
    row_base: RowBase,
}

impl Dtw {
    /// Create an engine for `pattern` with default boundary and reporting.
    #[must_use]
    pub fn new(pattern: StepPattern) -> Self {
        Self {
            pattern,
            start_mode: StartMode::Anchored,
            row_base: RowBase::Zero,
        }
    }

    /// Create a classic three-neighbour DTW engine.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(StepPattern::Classic)
    }

    /// Create an online (length-normalized choice) DTW engine.
    #[must_use]
    pub fn online() -> Self {
        Self::new(StepPattern::Online)
    }

    /// Create a three-row-skip NSDTW engine.
    #[must_use]
    pub fn three_row_skip() -> Self {
        Self::new(StepPattern::ThreeRowSkip)
    }

    /// Create a two-column-skip NSDTW engine.
    #[must_use]
    pub fn two_column_skip() -> Self {
        Self::new(StepPattern::TwoColumnSkip)
    }

    /// Set where paths may start in column 0.
    #[must_use]
    pub fn with_start_mode(mut self, start_mode: StartMode) -> Self {
        self.start_mode = start_mode;
        self
    }

    /// Set the row-numbering convention for reported rows.
    #[must_use]
    pub fn with_row_base(mut self, row_base: RowBase) -> Self {
        self.row_base = row_base;
        self
    }

    /// Return the step pattern.
    #[must_use]
    pub fn pattern(&self) -> StepPattern {
        self.pattern
    }

    /// Return the column-0 start mode.
    #[must_use]
    pub fn start_mode(&self) -> StartMode {
        self.start_mode
    }

    /// Return the row-numbering convention.
    #[must_use]
    pub fn row_base(&self) -> RowBase {
        self.row_base
    }

    /// Run the full sweep over `costs` and select the endpoint.
    ///
    /// Runs in O(M * N) time and allocates the accumulated-cost, path-length
    /// and origin-row tables once, at full size.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::TooFewRows`] | `costs.rows()` is below [`StepPattern::min_rows`] |
    #[instrument(
        skip(self, costs),
        fields(pattern = %self.pattern, rows = costs.rows(), cols = costs.cols())
    )]
    pub fn align(&self, costs: LocalCostView<'_>) -> Result<Alignment, DtwError> {
        self.check_rows(costs.rows())?;

        let tables = match self.pattern {
            StepPattern::Classic => sweep::<Classic>(costs, self.start_mode),
            StepPattern::Online => sweep::<Online>(costs, self.start_mode),
            StepPattern::ThreeRowSkip => sweep::<ThreeRowSkip>(costs, self.start_mode),
            StepPattern::TwoColumnSkip => sweep::<TwoColumnSkip>(costs, self.start_mode),
        };

        let end_row = select_end_row(&tables.acc);
        let end = (end_row, costs.cols() - 1);
        let distance = NormalizedDistance::from_endpoint(tables.acc[end], tables.len[end]);
        debug!(end_row, distance = distance.value(), path_length = tables.len[end], "endpoint selected");

        Ok(Alignment {
            pattern: self.pattern,
            row_base: self.row_base,
            accumulated: tables.acc,
            lengths: tables.len,
            origins: self.pattern.tracks_origin().then_some(tables.origin),
            end_row,
            distance,
        })
    }

    /// Compute only the normalized distance and end row.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::TooFewRows`] | `costs.rows()` is below [`StepPattern::min_rows`] |
    pub fn score(&self, costs: LocalCostView<'_>) -> Result<Score, DtwError> {
        self.align(costs).map(|a| a.score())
    }

    /// Align every matrix in `matrices`, in parallel across matrices.
    ///
    /// Each computation is independent and single-threaded; results keep the
    /// input order.
    ///
    /// # Errors
    ///
    /// Returns a [`DtwError`] if any matrix is rejected. When several are
    /// rejected, which error is returned is unspecified.
    #[instrument(skip(self, matrices), fields(pattern = %self.pattern, n = matrices.len()))]
    pub fn align_many(&self, matrices: &[LocalCostMatrix]) -> Result<Vec<Alignment>, DtwError> {
        matrices.par_iter().map(|m| self.align(m.as_view())).collect()
    }

    /// Score every matrix and return them ordered by ascending distance.
    ///
    /// Equal distances keep input order. NaN distances sort last.
    ///
    /// # Errors
    ///
    /// Returns a [`DtwError`] if any matrix is rejected. When several are
    /// rejected, which error is returned is unspecified.
    #[instrument(skip(self, matrices), fields(pattern = %self.pattern, n = matrices.len()))]
    pub fn rank(&self, matrices: &[LocalCostMatrix]) -> Result<Vec<RankedMatch>, DtwError> {
        let mut ranked: Vec<RankedMatch> = matrices
            .par_iter()
            .enumerate()
            .map(|(index, m)| self.score(m.as_view()).map(|score| RankedMatch { index, score }))
            .collect::<Result<_, _>>()?;
        ranked.sort_by(rank_order);
        if let Some(best) = ranked.first() {
            debug!(index = best.index, distance = best.score.distance.value(), "best match");
        }
        Ok(ranked)
    }

    fn check_rows(&self, rows: usize) -> Result<(), DtwError> {
        let required = self.pattern.min_rows();
        if rows < required {
            return Err(DtwError::TooFewRows {
                pattern: self.pattern,
                required,
                rows,
            });
        }
        Ok(())
    }
}

/// Ascending distance with NaN after every other value, including +inf.
fn rank_order(a: &RankedMatch, b: &RankedMatch) -> Ordering {
    let (x, y) = (a.score.distance.value(), b.score.distance.value());
    x.is_nan()
        .cmp(&y.is_nan())
        .then_with(|| x.partial_cmp(&y).unwrap_or(Ordering::Equal))
}

/// Boundary initialization followed by the row-major interior recurrence.
///
/// Every interior cell only reads cells in earlier rows or earlier columns of
/// its own row, all of which are final by the time it is visited.
fn sweep<P: StepPolicy>(costs: LocalCostView<'_>, start_mode: StartMode) -> Tables {
    let (rows, cols) = (costs.rows(), costs.cols());
    let mut tables = Tables::new(rows, cols);

    seed_first_column(&mut tables, costs, start_mode);
    let top = P::PATTERN.boundary_rows().min(rows);
    for m in 0..top {
        fill_boundary_row(&mut tables, costs, m);
    }

    for m in top..rows {
        for n in 1..cols {
            let local = costs.at(m, n);
            let (step, pred) = P::choose(&tables, m, n, local);
            tables.extend((m, n), pred, &step, local);
        }
    }

    tables
}
