use super::normalizer::normalize_key;
use super::{ClimateDataSource, DatasetError, Decade, Location, ProjectionPoint};
use crate::scoring::{EmissionsScenario, MetricKind};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

const YEAR_COLUMN: &str = "year";

/// Directory of per-city projection CSVs.
///
/// Layout: `<root>/<City>/<stem>_<suffix>.csv`, e.g. `ClimateData/Ann Arbor/ann_arbor_tmax.csv`,
/// with a `year` column and one weighted-mean column per emissions scenario.
#[derive(Debug, Clone)]
pub struct CsvClimateArchive {
    root: PathBuf,
}

impl CsvClimateArchive {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dataset_path(&self, location: &Location, metric: MetricKind) -> PathBuf {
        self.root.join(&location.city).join(format!(
            "{}_{}.csv",
            location.file_stem(),
            metric.file_suffix()
        ))
    }

    fn load(
        &self,
        location: &Location,
        metric: MetricKind,
    ) -> Result<Vec<ProjectionPoint>, DatasetError> {
        let path = self.dataset_path(location, metric);
        debug!(path = %path.display(), "reading projection table");
        let file = std::fs::File::open(&path).map_err(|source| DatasetError::Io {
            path: path.clone(),
            source,
        })?;
        parse_projection_table(file, &path)
    }
}

impl ClimateDataSource for CsvClimateArchive {
    fn fetch(
        &self,
        location: &Location,
        decade: Decade,
        scenario: EmissionsScenario,
        metric: MetricKind,
    ) -> Result<f64, DatasetError> {
        self.load(location, metric)?
            .iter()
            .find(|point| point.year == i32::from(decade.year()))
            .and_then(|point| point.value(scenario))
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
        self.load(location, metric)
    }
}

pub(crate) fn parse_projection_table<R: Read>(
    reader: R,
    path: &Path,
) -> Result<Vec<ProjectionPoint>, DatasetError> {
    let csv_error = |source| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers().map_err(csv_error)?.clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|header| normalize_key(header) == name)
            .ok_or_else(|| DatasetError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
    };
    let year_index = column(YEAR_COLUMN)?;
    let low_index = column(EmissionsScenario::Low.column())?;
    let high_index = column(EmissionsScenario::High.column())?;

    let mut points = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(csv_error)?;
        let year = match parse_cell(record.get(year_index), path)? {
            Some(year) => year.round() as i32,
            None => continue,
        };

        points.push(ProjectionPoint {
            year,
            low_emissions: parse_cell(record.get(low_index), path)?,
            high_emissions: parse_cell(record.get(high_index), path)?,
        });
    }

    Ok(points)
}

fn parse_cell(cell: Option<&str>, path: &Path) -> Result<Option<f64>, DatasetError> {
    let raw = match cell.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };

    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| DatasetError::InvalidValue {
            path: path.to_path_buf(),
            raw: raw.to_string(),
        })
}
