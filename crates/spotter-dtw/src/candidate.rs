//! Ordered candidate reduction shared by every step pattern.

/// Pick the winning candidate from keys listed in tie-break priority order.
///
/// The winner is the first key equal to the minimum of the non-NaN keys, so on
/// exact ties the candidate listed earlier always wins and a NaN key never
/// displaces a comparable one. If every key is NaN the first candidate wins.
///
/// # Panics
///
/// Panics if `keys` is empty.
pub(crate) fn select(keys: &[f64]) -> usize {
    assert!(!keys.is_empty(), "candidate list must be non-empty");
    let min = keys.iter().copied().fold(f64::NAN, f64::min);
    keys.iter().position(|&k| k == min).unwrap_or(0)
}
