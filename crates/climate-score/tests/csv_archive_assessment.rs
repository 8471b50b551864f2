use std::path::PathBuf;
use std::sync::Arc;

use climate_score::assessment::{AssessmentError, ClimateAssessmentService};
use climate_score::dataset::{
    ClimateDataSource, CsvClimateArchive, DatasetError, Decade, HazardRegistry, Location,
};
use climate_score::scoring::{EmissionsScenario, MetricKind, SubScore};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ClimateData")
}

fn ann_arbor() -> Location {
    Location::new("Ann Arbor", "MI")
}

fn service() -> ClimateAssessmentService<CsvClimateArchive> {
    let hazards =
        HazardRegistry::from_path(data_dir().join("natural_disasters.csv")).expect("hazards load");
    ClimateAssessmentService::new(Arc::new(CsvClimateArchive::new(data_dir()))).with_hazards(hazards)
}

#[test]
fn archive_reads_weighted_mean_for_each_scenario() {
    let archive = CsvClimateArchive::new(data_dir());

    let low = archive
        .fetch(&ann_arbor(), Decade(2040), EmissionsScenario::Low, MetricKind::MaxTemperature)
        .expect("low tmax present");
    let high = archive
        .fetch(&ann_arbor(), Decade(2040), EmissionsScenario::High, MetricKind::MaxTemperature)
        .expect("high tmax present");

    assert_eq!(low, 60.0);
    assert_eq!(high, 67.5);
}

#[test]
fn archive_reports_blank_cells_as_not_found() {
    let archive = CsvClimateArchive::new(data_dir());
    let error = archive
        .fetch(&ann_arbor(), Decade(2060), EmissionsScenario::Low, MetricKind::ColdDays)
        .expect_err("blank cell");

    assert!(matches!(error, DatasetError::NotFound { .. }));
}

#[test]
fn service_scores_ann_arbor_2040() {
    let result = service()
        .assess(&ann_arbor(), Decade(2040))
        .expect("assessment succeeds");

    let low = &result.assessment.low_emissions;
    assert_eq!(low.score.value(), 8);
    let hot_days = low.component(MetricKind::HotDays).expect("hot days traced");
    assert_eq!(hot_days.input, 0.3);
    assert_eq!(hot_days.score, SubScore::MAX);

    let high = &result.assessment.high_emissions;
    assert_eq!(high.score.value(), 7);
    let dry_days = high.component(MetricKind::DryDays).expect("dry days traced");
    assert_eq!(dry_days.score.value(), 7.5);

    assert_eq!(result.assessment.overall.value(), 8);

    let hazards = result.hazards.expect("hazard profile attached");
    assert_eq!(hazards.tornadoes.as_deref(), Some("Moderate"));
}

#[test]
fn service_fails_fast_on_gaps() {
    match service().assess(&ann_arbor(), Decade(2060)) {
        Err(AssessmentError::MissingMetric {
            scenario,
            metric,
            source,
            ..
        }) => {
            assert_eq!(scenario, EmissionsScenario::Low);
            assert_eq!(metric, MetricKind::ColdDays);
            assert!(source.is_not_found());
        }
        other => panic!("expected missing metric, got {other:?}"),
    }
}

#[test]
fn service_surfaces_missing_city_directory() {
    match service().assess(&Location::new("Phoenix", "AZ"), Decade(2040)) {
        Err(AssessmentError::MissingMetric { metric, source, .. }) => {
            assert_eq!(metric, MetricKind::MaxTemperature);
            assert!(matches!(source, DatasetError::Io { .. }));
        }
        other => panic!("expected missing metric, got {other:?}"),
    }
}

#[test]
fn projection_series_covers_every_decade() {
    let series = service()
        .projection_series(&ann_arbor(), MetricKind::MaxTemperature)
        .expect("series loads");

    let years: Vec<i32> = series.iter().map(|point| point.year).collect();
    assert_eq!(years, vec![2020, 2040, 2060, 2080]);
    assert!(series
        .iter()
        .all(|point| point.high_emissions >= point.low_emissions));
}
