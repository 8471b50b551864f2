use crate::infra::{load_hazards, open_archive};
use clap::Args;
use climate_score::assessment::{ClimateAssessmentService, LocationAssessment};
use climate_score::config::{AppConfig, DataConfig};
use climate_score::dataset::LocationCatalog;
use climate_score::error::AppError;
use climate_score::scoring::{EmissionsScenario, ScenarioEvaluation};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Location label, e.g. "Ann Arbor, MI" (state optional)
    pub(crate) location: String,
    /// Projection decade to score
    #[arg(long, default_value_t = 2040)]
    pub(crate) decade: u16,
    /// Override the configured climate data directory
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Override the configured natural-disaster sheet
    #[arg(long)]
    pub(crate) hazards: Option<PathBuf>,
    /// Emit the assessment as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct LocationsArgs {
    /// Emit the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        location,
        decade,
        data_dir,
        hazards,
        json,
    } = args;

    let data = resolve_data_config(AppConfig::load()?.data, data_dir, hazards);
    let mut service = ClimateAssessmentService::new(Arc::new(open_archive(&data)?));
    if let Some(registry) = load_hazards(&data.hazards_file)? {
        service = service.with_hazards(registry);
    }

    let (location, decade) = service.resolve(&location, decade)?;
    let assessment = service.assess(&location, decade)?;

    if json {
        print_json(&assessment)?;
    } else {
        for line in render_assessment(&assessment) {
            println!("{line}");
        }
    }

    Ok(())
}

pub(crate) fn run_locations(args: LocationsArgs) -> Result<(), AppError> {
    let catalog = LocationCatalog::standard();

    if args.json {
        print_json(&catalog)?;
    } else {
        for line in render_catalog(&catalog) {
            println!("{line}");
        }
    }

    Ok(())
}

fn resolve_data_config(
    mut data: DataConfig,
    data_dir: Option<PathBuf>,
    hazards: Option<PathBuf>,
) -> DataConfig {
    if let Some(dir) = data_dir {
        if hazards.is_none() {
            data.hazards_file = dir.join("natural_disasters.csv");
        }
        data.climate_dir = dir;
    }
    if let Some(file) = hazards {
        data.hazards_file = file;
    }
    data
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn render_assessment(result: &LocationAssessment) -> Vec<String> {
    let mut lines = vec![
        format!("Climate score for {} ({})", result.location, result.decade),
        String::new(),
    ];

    for scenario in EmissionsScenario::ordered() {
        lines.extend(render_scenario(result.assessment.scenario(scenario)));
        lines.push(String::new());
    }

    lines.push(format!(
        "Overall score: {}/10",
        result.assessment.overall.value()
    ));

    if let Some(hazards) = &result.hazards {
        lines.push(String::new());
        lines.push("Natural hazards (not scored):".to_string());
        for (name, level) in [
            ("Earthquakes", &hazards.earthquakes),
            ("Hurricanes", &hazards.hurricanes),
            ("Wild fires", &hazards.wild_fires),
            ("Tornadoes", &hazards.tornadoes),
        ] {
            lines.push(format!(
                "  {:<12} {}",
                name,
                level.as_deref().unwrap_or("unknown")
            ));
        }
    }

    lines
}

fn render_scenario(evaluation: &ScenarioEvaluation) -> Vec<String> {
    let mut lines = vec![format!(
        "{} | score {}/10",
        evaluation.scenario.label(),
        evaluation.score.value()
    )];

    for component in &evaluation.components {
        lines.push(format!(
            "  {:<30} {:>8.2} -> {:>5.2}",
            component.kind.label(),
            component.input,
            component.score.value()
        ));
    }

    lines
}

pub(crate) fn render_catalog(catalog: &LocationCatalog) -> Vec<String> {
    let decades = catalog
        .decades()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![format!("Decades: {decades}"), "Locations:".to_string()];
    lines.extend(
        catalog
            .locations()
            .iter()
            .map(|location| format!("  {location}")),
    );
    lines
}
