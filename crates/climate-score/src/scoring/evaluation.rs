use super::aggregate::{scenario_score, ScenarioScore, SubScoreSet};
use super::comparator::{overall_score, OverallScore};
use super::error::ScoreError;
use super::metric::{EmissionsScenario, MetricKind, ScenarioInputs};
use super::transfer::{sub_score, SubScore};
use serde::Serialize;
use tracing::{debug, warn};

/// One traced step of a scenario evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScoreComponent {
    pub kind: MetricKind,
    pub input: f64,
    pub score: SubScore,
}

/// Scenario score together with the sub-scores that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioEvaluation {
    pub scenario: EmissionsScenario,
    pub components: Vec<SubScoreComponent>,
    pub score: ScenarioScore,
}

impl ScenarioEvaluation {
    pub fn component(&self, kind: MetricKind) -> Option<&SubScoreComponent> {
        self.components
            .iter()
            .find(|component| component.kind == kind)
    }

    pub fn sub_scores(&self) -> SubScoreSet {
        self.components
            .iter()
            .map(|component| (component.kind, component.score))
            .collect()
    }
}

/// Both scenario evaluations and the overall score derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateAssessment {
    pub low_emissions: ScenarioEvaluation,
    pub high_emissions: ScenarioEvaluation,
    pub overall: OverallScore,
}

impl ClimateAssessment {
    pub fn scenario(&self, scenario: EmissionsScenario) -> &ScenarioEvaluation {
        match scenario {
            EmissionsScenario::Low => &self.low_emissions,
            EmissionsScenario::High => &self.high_emissions,
        }
    }
}

pub fn evaluate_scenario(
    scenario: EmissionsScenario,
    inputs: &ScenarioInputs,
) -> Result<ScenarioEvaluation, ScoreError> {
    let mut sub_scores = SubScoreSet::new();
    let mut components = Vec::with_capacity(MetricKind::ordered().len());

    for metric in inputs.metrics() {
        let score = sub_score(metric.kind, metric.value).inspect_err(|err| {
            warn!(%scenario, metric = %metric.kind, %err, "rejected climate input");
        })?;
        debug!(
            %scenario,
            metric = %metric.kind,
            input = metric.value,
            sub_score = score.value(),
            "sub-score computed"
        );

        sub_scores.insert(metric.kind, score);
        components.push(SubScoreComponent {
            kind: metric.kind,
            input: metric.value,
            score,
        });
    }

    let score = scenario_score(&sub_scores)?;
    debug!(%scenario, score = score.value(), "scenario score computed");

    Ok(ScenarioEvaluation {
        scenario,
        components,
        score,
    })
}

/// Scores a location/decade pair from its twelve raw inputs.
pub fn assess(
    low_emissions: &ScenarioInputs,
    high_emissions: &ScenarioInputs,
) -> Result<ClimateAssessment, ScoreError> {
    let low_emissions = evaluate_scenario(EmissionsScenario::Low, low_emissions)?;
    let high_emissions = evaluate_scenario(EmissionsScenario::High, high_emissions)?;
    let overall = overall_score(low_emissions.score, high_emissions.score);
    debug!(overall = overall.value(), "overall score computed");

    Ok(ClimateAssessment {
        low_emissions,
        high_emissions,
        overall,
    })
}
