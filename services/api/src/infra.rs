use climate_score::config::DataConfig;
use climate_score::dataset::{CsvClimateArchive, HazardRegistry};
use climate_score::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn open_archive(data: &DataConfig) -> Result<CsvClimateArchive, AppError> {
    if !data.climate_dir.is_dir() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!(
                "climate data directory '{}' does not exist",
                data.climate_dir.display()
            ),
        )));
    }

    Ok(CsvClimateArchive::new(&data.climate_dir))
}

/// Hazard profiles are informational; a missing sheet only disables them.
pub(crate) fn load_hazards(path: &Path) -> Result<Option<HazardRegistry>, AppError> {
    if !path.exists() {
        warn!(path = %path.display(), "hazard sheet not found; assessments will omit hazards");
        return Ok(None);
    }

    let registry = HazardRegistry::from_path(path)?;
    info!(path = %path.display(), profiles = registry.len(), "hazard sheet loaded");
    Ok(Some(registry))
}
