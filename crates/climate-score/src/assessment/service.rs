use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::dataset::{
    ClimateDataSource, DatasetError, Decade, HazardProfile, HazardRegistry, Location,
    LocationCatalog, ProjectionPoint,
};
use crate::scoring::{
    evaluate_scenario, overall_score, ClimateAssessment, EmissionsScenario, MetricKind,
    ScenarioInputs, ScoreError,
};

/// Scored result for one location and decade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationAssessment {
    pub location: Location,
    pub decade: Decade,
    #[serde(flatten)]
    pub assessment: ClimateAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazards: Option<HazardProfile>,
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("unknown location '{0}'")]
    UnknownLocation(String),
    #[error("decade {0} is not offered")]
    UnsupportedDecade(Decade),
    #[error("{metric} unavailable for {location} in {decade} under {scenario}: {source}")]
    MissingMetric {
        location: String,
        decade: Decade,
        scenario: EmissionsScenario,
        metric: MetricKind,
        #[source]
        source: DatasetError,
    },
    #[error("scoring failed under {scenario}: {source}")]
    Scoring {
        scenario: EmissionsScenario,
        #[source]
        source: ScoreError,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl AssessmentError {
    /// True when the request named something the catalog or the data does not have.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::UnknownLocation(_) | Self::UnsupportedDecade(_) => true,
            Self::MissingMetric { source, .. } | Self::Dataset(source) => source.is_not_found(),
            Self::Scoring { .. } => false,
        }
    }
}

/// Service composing a data source, the location catalog, and the scoring engine.
pub struct ClimateAssessmentService<S> {
    source: Arc<S>,
    catalog: LocationCatalog,
    hazards: Option<Arc<HazardRegistry>>,
}

impl<S> ClimateAssessmentService<S>
where
    S: ClimateDataSource + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            catalog: LocationCatalog::standard(),
            hazards: None,
        }
    }

    pub fn with_catalog(mut self, catalog: LocationCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_hazards(mut self, hazards: HazardRegistry) -> Self {
        self.hazards = Some(Arc::new(hazards));
        self
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// Maps a user-facing label and year onto a catalog entry.
    pub fn resolve(&self, label: &str, year: u16) -> Result<(Location, Decade), AssessmentError> {
        let location = self
            .catalog
            .find(label)
            .cloned()
            .ok_or_else(|| AssessmentError::UnknownLocation(label.to_string()))?;

        let decade = Decade(year);
        if !self.catalog.supports_decade(decade) {
            return Err(AssessmentError::UnsupportedDecade(decade));
        }

        Ok((location, decade))
    }

    /// Fetches the six raw metrics for one scenario, failing on the first gap.
    pub fn scenario_inputs(
        &self,
        location: &Location,
        decade: Decade,
        scenario: EmissionsScenario,
    ) -> Result<ScenarioInputs, AssessmentError> {
        ScenarioInputs::try_from_fn(|metric| {
            self.source
                .fetch(location, decade, scenario, metric)
                .map_err(|source| AssessmentError::MissingMetric {
                    location: location.label(),
                    decade,
                    scenario,
                    metric,
                    source,
                })
        })
    }

    pub fn assess(
        &self,
        location: &Location,
        decade: Decade,
    ) -> Result<LocationAssessment, AssessmentError> {
        let low_inputs = self.scenario_inputs(location, decade, EmissionsScenario::Low)?;
        let high_inputs = self.scenario_inputs(location, decade, EmissionsScenario::High)?;

        let evaluate = |scenario, inputs: &ScenarioInputs| {
            evaluate_scenario(scenario, inputs)
                .map_err(|source| AssessmentError::Scoring { scenario, source })
        };
        let low_emissions = evaluate(EmissionsScenario::Low, &low_inputs)?;
        let high_emissions = evaluate(EmissionsScenario::High, &high_inputs)?;
        let overall = overall_score(low_emissions.score, high_emissions.score);

        info!(
            location = %location,
            %decade,
            low = low_emissions.score.value(),
            high = high_emissions.score.value(),
            overall = overall.value(),
            "location assessed"
        );

        let hazards = self
            .hazards
            .as_ref()
            .and_then(|registry| registry.lookup(location))
            .cloned();

        Ok(LocationAssessment {
            location: location.clone(),
            decade,
            assessment: ClimateAssessment {
                low_emissions,
                high_emissions,
                overall,
            },
            hazards,
        })
    }

    pub fn projection_series(
        &self,
        location: &Location,
        metric: MetricKind,
    ) -> Result<Vec<ProjectionPoint>, AssessmentError> {
        Ok(self.source.projection_series(location, metric)?)
    }
}
