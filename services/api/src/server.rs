use crate::cli::ServeArgs;
use crate::infra::{load_hazards, open_archive, AppState};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use climate_score::assessment::ClimateAssessmentService;
use climate_score::config::AppConfig;
use climate_score::error::AppError;
use climate_score::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let archive = Arc::new(open_archive(&config.data)?);
    let mut service = ClimateAssessmentService::new(archive);
    if let Some(hazards) = load_hazards(&config.data.hazards_file)? {
        service = service.with_hazards(hazards);
    }

    let app = with_assessment_routes(Arc::new(service))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        data_dir = %config.data.climate_dir.display(),
        "climate score service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
