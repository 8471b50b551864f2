use serde::{Deserialize, Serialize};
use std::fmt;

/// The six climate variables that feed a scenario score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    MaxTemperature,
    MinTemperature,
    Precipitation,
    HotDays,
    ColdDays,
    DryDays,
}

impl MetricKind {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::MaxTemperature,
            Self::MinTemperature,
            Self::Precipitation,
            Self::HotDays,
            Self::ColdDays,
            Self::DryDays,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MaxTemperature => "Average Max Temperature (°F)",
            Self::MinTemperature => "Average Min Temperature (°F)",
            Self::Precipitation => "Annual Precipitation (in)",
            Self::HotDays => "Days Above 100°F",
            Self::ColdDays => "Days Below 32°F",
            Self::DryDays => "Dry Days",
        }
    }

    /// Suffix of the per-city projection file holding this metric.
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::MaxTemperature => "tmax",
            Self::MinTemperature => "tmin",
            Self::Precipitation => "pcpn",
            Self::HotDays => "100f",
            Self::ColdDays => "32f",
            Self::DryDays => "dry_days",
        }
    }

    /// Day counts are scored as whole days.
    pub const fn is_day_count(self) -> bool {
        matches!(self, Self::HotDays | Self::ColdDays | Self::DryDays)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MaxTemperature => "max_temperature",
            Self::MinTemperature => "min_temperature",
            Self::Precipitation => "precipitation",
            Self::HotDays => "hot_days",
            Self::ColdDays => "cold_days",
            Self::DryDays => "dry_days",
        };
        f.write_str(name)
    }
}

/// A single raw measurement of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateMetric {
    pub kind: MetricKind,
    pub value: f64,
}

impl ClimateMetric {
    pub const fn new(kind: MetricKind, value: f64) -> Self {
        Self { kind, value }
    }
}

/// Greenhouse-gas pathway a projection was produced under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionsScenario {
    Low,
    High,
}

impl EmissionsScenario {
    pub const fn ordered() -> [Self; 2] {
        [Self::Low, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Emissions",
            Self::High => "High Emissions",
        }
    }

    /// Weighted-mean column carrying this pathway in the projection files.
    pub const fn column(self) -> &'static str {
        match self {
            Self::Low => "rcp45_weighted_mean",
            Self::High => "rcp85_weighted_mean",
        }
    }
}

impl fmt::Display for EmissionsScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("low emissions (RCP 4.5)"),
            Self::High => f.write_str("high emissions (RCP 8.5)"),
        }
    }
}

/// Raw inputs for one scenario of one location/decade pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    pub max_temperature: f64,
    pub min_temperature: f64,
    pub precipitation: f64,
    pub hot_days: f64,
    pub cold_days: f64,
    pub dry_days: f64,
}

impl ScenarioInputs {
    pub fn value(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::MaxTemperature => self.max_temperature,
            MetricKind::MinTemperature => self.min_temperature,
            MetricKind::Precipitation => self.precipitation,
            MetricKind::HotDays => self.hot_days,
            MetricKind::ColdDays => self.cold_days,
            MetricKind::DryDays => self.dry_days,
        }
    }

    pub fn metrics(&self) -> [ClimateMetric; 6] {
        MetricKind::ordered().map(|kind| ClimateMetric::new(kind, self.value(kind)))
    }

    /// Builds inputs from a lookup, stopping at the first metric the lookup cannot supply.
    pub fn try_from_fn<E, F>(mut lookup: F) -> Result<Self, E>
    where
        F: FnMut(MetricKind) -> Result<f64, E>,
    {
        Ok(Self {
            max_temperature: lookup(MetricKind::MaxTemperature)?,
            min_temperature: lookup(MetricKind::MinTemperature)?,
            precipitation: lookup(MetricKind::Precipitation)?,
            hot_days: lookup(MetricKind::HotDays)?,
            cold_days: lookup(MetricKind::ColdDays)?,
            dry_days: lookup(MetricKind::DryDays)?,
        })
    }
}
