use super::aggregate::ScenarioScore;
use super::rounding::to_score_integer;
use serde::Serialize;

/// Final suitability for a location/decade pair across both pathways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct OverallScore(u8);

impl OverallScore {
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Averages the two scenario scores. Symmetric in its arguments.
pub fn overall_score(low: ScenarioScore, high: ScenarioScore) -> OverallScore {
    let mean = (f64::from(low.value()) + f64::from(high.value())) / 2.0;
    OverallScore(to_score_integer(mean))
}
