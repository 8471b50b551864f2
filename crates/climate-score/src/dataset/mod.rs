//! Data access for per-location climate projections.
//!
//! The scoring engine only sees numbers; this module resolves a
//! (location, decade, scenario, metric) key to one of them.

mod archive;
mod catalog;
mod hazards;
mod memory;
mod normalizer;

use crate::scoring::{EmissionsScenario, MetricKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub use archive::CsvClimateArchive;
pub use catalog::LocationCatalog;
pub use hazards::{HazardProfile, HazardRegistry};
pub use memory::InMemoryClimateData;

/// Capability for looking up one projected value.
pub trait ClimateDataSource: Send + Sync {
    fn fetch(
        &self,
        location: &Location,
        decade: Decade,
        scenario: EmissionsScenario,
        metric: MetricKind,
    ) -> Result<f64, DatasetError>;

    /// Every projected year for one metric, both scenarios side by side.
    fn projection_series(
        &self,
        location: &Location,
        metric: MetricKind,
    ) -> Result<Vec<ProjectionPoint>, DatasetError>;
}

/// A scored place, labelled "City, ST".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: Option<String>,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: Some(state.into()),
        }
    }

    pub fn parse(label: &str) -> Result<Self, DatasetError> {
        let mut parts = label.splitn(2, ',');
        let city = parts
            .next()
            .map(|part| part.split_whitespace().collect::<Vec<_>>().join(" "))
            .unwrap_or_default();
        if city.is_empty() {
            return Err(DatasetError::InvalidLocation(label.to_string()));
        }

        let state = parts
            .next()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty());

        Ok(Self { city, state })
    }

    pub fn label(&self) -> String {
        match &self.state {
            Some(state) => format!("{}, {}", self.city, state),
            None => self.city.clone(),
        }
    }

    /// File-name stem used by the projection archive, e.g. `ann_arbor`.
    pub fn file_stem(&self) -> String {
        self.city.replace(' ', "_").to_lowercase()
    }

    pub(crate) fn city_key(&self) -> String {
        normalizer::normalize_key(&self.city)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Location {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Projection year a score is computed for, e.g. 2040.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decade(pub u16);

impl Decade {
    pub const fn year(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of a projection file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub year: i32,
    pub low_emissions: Option<f64>,
    pub high_emissions: Option<f64>,
}

impl ProjectionPoint {
    pub fn value(&self, scenario: EmissionsScenario) -> Option<f64> {
        match scenario {
            EmissionsScenario::Low => self.low_emissions,
            EmissionsScenario::High => self.high_emissions,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("no {metric} projection for {location} in {decade} under {scenario}")]
    NotFound {
        location: String,
        decade: Decade,
        scenario: EmissionsScenario,
        metric: MetricKind,
    },
    #[error("failed to read climate data {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid climate CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("column '{column}' missing from {}", .path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("value '{raw}' in {} is not a number", .path.display())]
    InvalidValue { path: PathBuf, raw: String },
    #[error("'{0}' is not a recognizable location")]
    InvalidLocation(String),
}

impl DatasetError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
            || matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
