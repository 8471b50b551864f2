use crate::scoring::{MetricKind, ScenarioInputs, SubScore, SubScoreSet};

pub(super) fn ideal_inputs() -> ScenarioInputs {
    ScenarioInputs {
        max_temperature: 75.0,
        min_temperature: 75.0,
        precipitation: 30.28,
        hot_days: 0.0,
        cold_days: 0.0,
        dry_days: 260.0,
    }
}

/// Max temperature and hot days both pinned to the floor, everything else ideal.
pub(super) fn heat_stressed_inputs() -> ScenarioInputs {
    ScenarioInputs {
        max_temperature: 150.0,
        hot_days: 18.0,
        ..ideal_inputs()
    }
}

pub(super) fn uniform_set(score: SubScore) -> SubScoreSet {
    MetricKind::ordered()
        .into_iter()
        .map(|kind| (kind, score))
        .collect()
}

pub(super) fn set_from_values(values: [f64; 6]) -> SubScoreSet {
    MetricKind::ordered()
        .into_iter()
        .zip(values)
        .map(|(kind, value)| (kind, SubScore::new(value).expect("finite sub-score")))
        .collect()
}
