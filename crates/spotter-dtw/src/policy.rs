//! Step-pattern policies: candidate scoring plugged into the shared sweep.

use crate::candidate::select;
use crate::pattern::{StepPattern, Transition};
use crate::tables::Tables;

/// Decision logic for one step pattern.
///
/// Given an interior cell and the already-finalized tables, a policy names the
/// predecessor move that minimizes its candidate cost. The sweep in
/// [`crate::dtw`] owns everything else (boundaries, storage, endpoint).
pub(crate) trait StepPolicy {
    /// The pattern this policy implements.
    const PATTERN: StepPattern;

    /// Cost used to compare one candidate: the raw running sum, or its average
    /// over the extended path when the pattern normalizes candidates.
    fn candidate_cost(pred_acc: f64, pred_len: usize, step: &Transition, local: f64) -> f64 {
        let raw = pred_acc + local;
        if Self::PATTERN.normalizes_candidates() {
            raw / (pred_len + step.length_step) as f64
        } else {
            raw
        }
    }

    /// Choose the winning move into `(row, col)`.
    fn choose(tables: &Tables, row: usize, col: usize, local: f64) -> (Transition, (usize, usize)) {
        let transitions = Self::PATTERN.transitions(col);
        let mut keys = [0.0_f64; 4];
        let mut preds = [(0_usize, 0_usize); 4];
        for (i, step) in transitions.iter().enumerate() {
            let pred = (row - step.rows_back, col - step.cols_back);
            keys[i] = Self::candidate_cost(tables.acc[pred], tables.len[pred], step, local);
            preds[i] = pred;
        }
        let winner = select(&keys[..transitions.len()]);
        (transitions[winner], preds[winner])
    }
}

/// Classic DTW: unweighted diagonal, vertical, horizontal moves.
pub(crate) struct Classic;

impl StepPolicy for Classic {
    const PATTERN: StepPattern = StepPattern::Classic;
}

/// Online DTW: moves compared by the average cost of the extended path.
pub(crate) struct Online;

impl StepPolicy for Online {
    const PATTERN: StepPattern = StepPattern::Online;
}

/// NSDTW with up to three skipped reference rows per query column.
pub(crate) struct ThreeRowSkip;

impl StepPolicy for ThreeRowSkip {
    const PATTERN: StepPattern = StepPattern::ThreeRowSkip;
}

/// NSDTW with up to two query columns consumed per reference row.
pub(crate) struct TwoColumnSkip;

impl StepPolicy for TwoColumnSkip {
    const PATTERN: StepPattern = StepPattern::TwoColumnSkip;
}
