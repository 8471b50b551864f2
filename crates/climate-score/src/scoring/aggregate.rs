use super::error::ScoreError;
use super::metric::MetricKind;
use super::rounding::to_score_integer;
use super::transfer::SubScore;
use serde::Serialize;
use std::collections::BTreeMap;

/// Sub-scores for one scenario, at most one per metric kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubScoreSet {
    scores: BTreeMap<MetricKind, SubScore>,
}

impl SubScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sub-score, returning the one it replaced.
    pub fn insert(&mut self, kind: MetricKind, score: SubScore) -> Option<SubScore> {
        self.scores.insert(kind, score)
    }

    pub fn get(&self, kind: MetricKind) -> Option<SubScore> {
        self.scores.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn missing(&self) -> Vec<MetricKind> {
        MetricKind::ordered()
            .into_iter()
            .filter(|kind| !self.scores.contains_key(kind))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKind, SubScore)> + '_ {
        self.scores.iter().map(|(kind, score)| (*kind, *score))
    }
}

impl FromIterator<(MetricKind, SubScore)> for SubScoreSet {
    fn from_iter<I: IntoIterator<Item = (MetricKind, SubScore)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Rounded suitability under one emissions pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ScenarioScore(u8);

impl ScenarioScore {
    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if (1..=10).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoreError::OutOfRange { value })
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Accumulation order for the scenario mean; cold days are added before hot days.
const SUMMATION_ORDER: [MetricKind; 6] = [
    MetricKind::MaxTemperature,
    MetricKind::MinTemperature,
    MetricKind::Precipitation,
    MetricKind::ColdDays,
    MetricKind::HotDays,
    MetricKind::DryDays,
];

/// Unweighted mean of the six sub-scores, rounded half-to-even.
pub fn scenario_score(sub_scores: &SubScoreSet) -> Result<ScenarioScore, ScoreError> {
    let kinds = SUMMATION_ORDER;
    let mut total = 0.0;
    for kind in kinds {
        let score = sub_scores
            .get(kind)
            .ok_or(ScoreError::MissingMetric(kind))?;
        total += score.value();
    }

    let mean = total / kinds.len() as f64;
    Ok(ScenarioScore(to_score_integer(mean)))
}
