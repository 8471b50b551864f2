//! Integer rounding shared by the aggregator and the scenario comparator.
//!
//! Ties go to the even neighbour, so a mean of exactly 7.5 becomes 8 and 6.5 becomes 6.

pub(crate) const SCORE_FLOOR: f64 = 1.0;
pub(crate) const SCORE_CEILING: f64 = 10.0;

pub(crate) fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Rounds a mean of in-range scores onto the 1-10 integer scale.
pub(crate) fn to_score_integer(mean: f64) -> u8 {
    round_half_even(mean).clamp(SCORE_FLOOR, SCORE_CEILING) as u8
}
