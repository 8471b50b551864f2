//! Transfer functions mapping one raw climate metric onto a 1-10 sub-score.
//!
//! Each metric uses a tent penalty centred on a reference value: the score is 10 at the
//! reference and falls linearly in both directions, clamped to [1, 10].

use super::error::ScoreError;
use super::metric::MetricKind;
use super::rounding::{round_half_even, SCORE_CEILING, SCORE_FLOOR};
use serde::Serialize;

/// Ideal average temperature, applied to both daily max and daily min averages.
pub const IDEAL_TEMPERATURE_F: f64 = 75.0;
/// Average annual rainfall for the contiguous United States.
pub const IDEAL_PRECIPITATION_IN: f64 = 30.28;
/// Average annual number of dry days for the United States.
pub const IDEAL_DRY_DAYS: f64 = 260.0;
/// Points lost for each day above 100°F or below 32°F.
pub const EXTREME_DAY_PENALTY: f64 = 0.5;

/// Suitability rating for a single metric, always within [1, 10].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct SubScore(f64);

impl SubScore {
    pub const MIN: Self = Self(SCORE_FLOOR);
    pub const MAX: Self = Self(SCORE_CEILING);

    /// Accepts an externally computed rating, clamping it onto the scale.
    pub fn new(value: f64) -> Result<Self, ScoreError> {
        ensure_finite(value).map(Self::clamped)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    fn clamped(raw: f64) -> Self {
        if raw < SCORE_FLOOR {
            Self::MIN
        } else if raw > SCORE_CEILING {
            Self::MAX
        } else {
            Self(raw)
        }
    }
}

pub fn temperature_score(temperature: f64) -> Result<SubScore, ScoreError> {
    let temperature = ensure_finite(temperature)?;
    Ok(SubScore::clamped(tent(temperature, IDEAL_TEMPERATURE_F)))
}

pub fn precipitation_score(inches: f64) -> Result<SubScore, ScoreError> {
    let inches = ensure_finite(inches)?;
    Ok(SubScore::clamped(tent(inches, IDEAL_PRECIPITATION_IN)))
}

/// Scores a count of extreme-temperature days (hot and cold counts are scored separately).
pub fn extreme_day_score(days: f64) -> Result<SubScore, ScoreError> {
    let days = whole_days(ensure_finite(days)?);
    if days == 0.0 {
        return Ok(SubScore::MAX);
    }

    Ok(SubScore::clamped(SCORE_CEILING - EXTREME_DAY_PENALTY * days))
}

pub fn dry_day_score(days: f64) -> Result<SubScore, ScoreError> {
    let days = whole_days(ensure_finite(days)?);
    Ok(SubScore::clamped(tent(days, IDEAL_DRY_DAYS)))
}

/// Dispatches a raw value to the transfer function for its metric kind.
pub fn sub_score(kind: MetricKind, value: f64) -> Result<SubScore, ScoreError> {
    match kind {
        MetricKind::MaxTemperature | MetricKind::MinTemperature => temperature_score(value),
        MetricKind::Precipitation => precipitation_score(value),
        MetricKind::HotDays | MetricKind::ColdDays => extreme_day_score(value),
        MetricKind::DryDays => dry_day_score(value),
    }
}

fn tent(value: f64, ideal: f64) -> f64 {
    SCORE_CEILING - SCORE_CEILING * (value - ideal).abs() / ideal
}

fn whole_days(days: f64) -> f64 {
    round_half_even(days)
}

fn ensure_finite(value: f64) -> Result<f64, ScoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoreError::NonFiniteInput { value })
    }
}
