use super::{ClimateDataSource, DatasetError, Decade, Location, ProjectionPoint};
use crate::scoring::{EmissionsScenario, MetricKind, ScenarioInputs};
use std::collections::{BTreeMap, HashMap};

type MetricKey = (String, Decade, EmissionsScenario, MetricKind);

/// Map-backed data source for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClimateData {
    values: HashMap<MetricKey, f64>,
}

impl InMemoryClimateData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        location: &Location,
        decade: Decade,
        scenario: EmissionsScenario,
        metric: MetricKind,
        value: f64,
    ) {
        self.values
            .insert((location.city_key(), decade, scenario, metric), value);
    }

    /// Stores all six metrics of one scenario.
    pub fn with_scenario(
        mut self,
        location: &Location,
        decade: Decade,
        scenario: EmissionsScenario,
        inputs: &ScenarioInputs,
    ) -> Self {
        for metric in inputs.metrics() {
            self.insert(location, decade, scenario, metric.kind, metric.value);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ClimateDataSource for InMemoryClimateData {
    fn fetch(
        &self,
        location: &Location,
        decade: Decade,
        scenario: EmissionsScenario,
        metric: MetricKind,
    ) -> Result<f64, DatasetError> {
        self.values
            .get(&(location.city_key(), decade, scenario, metric))
            .copied()
            .ok_or_else(|| DatasetError::NotFound {
                location: location.label(),
                decade,
                scenario,
                metric,
            })
    }

    fn projection_series(
        &self,
        location: &Location,
        metric: MetricKind,
    ) -> Result<Vec<ProjectionPoint>, DatasetError> {
        let city = location.city_key();
        let mut rows: BTreeMap<Decade, ProjectionPoint> = BTreeMap::new();

        for ((key_city, decade, scenario, key_metric), value) in &self.values {
            if *key_city != city || *key_metric != metric {
                continue;
            }

            let point = rows.entry(*decade).or_insert(ProjectionPoint {
                year: i32::from(decade.year()),
                low_emissions: None,
                high_emissions: None,
            });
            match scenario {
                EmissionsScenario::Low => point.low_emissions = Some(*value),
                EmissionsScenario::High => point.high_emissions = Some(*value),
            }
        }

        Ok(rows.into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(max_temperature: f64) -> ScenarioInputs {
        ScenarioInputs {
            max_temperature,
            min_temperature: 41.0,
            precipitation: 33.1,
            hot_days: 2.0,
            cold_days: 120.0,
            dry_days: 240.0,
        }
    }

    #[test]
    fn fetch_matches_city_case_insensitively() {
        let location = Location::new("Ann Arbor", "MI");
        let data = InMemoryClimateData::new().with_scenario(
            &location,
            Decade(2040),
            EmissionsScenario::Low,
            &inputs(61.0),
        );

        let lookup = Location::parse("ann  arbor, MI").expect("parses");
        let value = data
            .fetch(&lookup, Decade(2040), EmissionsScenario::Low, MetricKind::DryDays)
            .expect("value stored");
        assert_eq!(value, 240.0);
        assert_eq!(data.len(), 6);
    }

    #[test]
    fn fetch_reports_absent_keys() {
        let location = Location::new("Ann Arbor", "MI");
        let data = InMemoryClimateData::new().with_scenario(
            &location,
            Decade(2040),
            EmissionsScenario::Low,
            &inputs(61.0),
        );

        let error = data
            .fetch(&location, Decade(2040), EmissionsScenario::High, MetricKind::DryDays)
            .expect_err("high scenario absent");
        assert!(error.is_not_found());
    }

    #[test]
    fn projection_series_pairs_scenarios_by_decade() {
        let location = Location::new("Boise", "ID");
        let data = InMemoryClimateData::new()
            .with_scenario(&location, Decade(2060), EmissionsScenario::High, &inputs(70.5))
            .with_scenario(&location, Decade(2020), EmissionsScenario::Low, &inputs(64.0))
            .with_scenario(&location, Decade(2020), EmissionsScenario::High, &inputs(64.8));

        let series = data
            .projection_series(&location, MetricKind::MaxTemperature)
            .expect("series builds");

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].year, 2020);
        assert_eq!(series[0].low_emissions, Some(64.0));
        assert_eq!(series[0].high_emissions, Some(64.8));
        assert_eq!(series[1].year, 2060);
        assert_eq!(series[1].low_emissions, None);
    }
}
