//! Retirement suitability scoring engine.
//!
//! Raw climate metrics become 1-10 sub-scores, six sub-scores become a scenario score, and the
//! low- and high-emissions scenario scores average into the overall score. Every function here
//! is pure; the per-metric trace is returned in [`ScenarioEvaluation`] and mirrored to `tracing`
//! at debug level.

mod aggregate;
mod comparator;
mod error;
mod evaluation;
mod metric;
mod rounding;
mod transfer;

#[cfg(test)]
mod tests;

pub use aggregate::{scenario_score, ScenarioScore, SubScoreSet};
pub use comparator::{overall_score, OverallScore};
pub use error::ScoreError;
pub use evaluation::{
    assess, evaluate_scenario, ClimateAssessment, ScenarioEvaluation, SubScoreComponent,
};
pub use metric::{ClimateMetric, EmissionsScenario, MetricKind, ScenarioInputs};
pub use transfer::{
    dry_day_score, extreme_day_score, precipitation_score, sub_score, temperature_score, SubScore,
    EXTREME_DAY_PENALTY, IDEAL_DRY_DAYS, IDEAL_PRECIPITATION_IN, IDEAL_TEMPERATURE_F,
};
