use crate::domain::{DecayFn, DecaySums};

/// Scores a single contribution from its precomputed decay sum and the
/// owning entity's importance.
///
/// With a positive cap multiplier the score cannot exceed that multiple of
/// the importance, so one early contributor to a huge repo cannot dominate
/// an entire ranking on their own.
///
/// The rounding convention is round-half-away-from-zero (`f64::round`),
/// applied here and nowhere else, so every downstream sum and comparison
/// sees the same integer.
pub fn score_contribution(
    decay_sums: &DecaySums,
    decay_fn: DecayFn,
    importance: f64,
    cap_multiplier: f64,
) -> i64 {
    let raw = decay_sums.get(decay_fn) * importance;
    let capped = if cap_multiplier > 0.0 {
        raw.min(cap_multiplier * importance)
    } else {
        raw
    };
    capped.round() as i64
}
