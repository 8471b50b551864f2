use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::service::{AssessmentError, ClimateAssessmentService};
use crate::dataset::{ClimateDataSource, ProjectionPoint};
use crate::scoring::{assess, MetricKind, ScenarioInputs, ScoreError};

/// Caller-supplied raw metrics for both emissions scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub low_emissions: ScenarioInputs,
    pub high_emissions: ScenarioInputs,
}

#[derive(Debug, Serialize)]
struct ProjectionResponse {
    location: String,
    metric: MetricKind,
    label: &'static str,
    points: Vec<ProjectionPoint>,
}

/// Router builder exposing catalog, assessment, and scoring endpoints.
pub fn assessment_router<S>(service: Arc<ClimateAssessmentService<S>>) -> Router
where
    S: ClimateDataSource + 'static,
{
    Router::new()
        .route("/api/v1/locations", get(catalog_handler::<S>))
        .route(
            "/api/v1/locations/:location/decades/:decade/assessment",
            get(assessment_handler::<S>),
        )
        .route(
            "/api/v1/locations/:location/projections/:metric",
            get(projection_handler::<S>),
        )
        .route("/api/v1/scores", post(score_handler))
        .with_state(service)
}

pub(crate) async fn catalog_handler<S>(
    State(service): State<Arc<ClimateAssessmentService<S>>>,
) -> Response
where
    S: ClimateDataSource + 'static,
{
    (StatusCode::OK, Json(service.catalog())).into_response()
}

pub(crate) async fn assessment_handler<S>(
    State(service): State<Arc<ClimateAssessmentService<S>>>,
    Path((location, decade)): Path<(String, u16)>,
) -> Response
where
    S: ClimateDataSource + 'static,
{
    let result = service
        .resolve(&location, decade)
        .and_then(|(location, decade)| service.assess(&location, decade));

    match result {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(error) => assessment_error_response(&error),
    }
}

pub(crate) async fn projection_handler<S>(
    State(service): State<Arc<ClimateAssessmentService<S>>>,
    Path((location, metric)): Path<(String, MetricKind)>,
) -> Response
where
    S: ClimateDataSource + 'static,
{
    let location = match service.catalog().find(&location) {
        Some(location) => location.clone(),
        None => return assessment_error_response(&AssessmentError::UnknownLocation(location)),
    };

    match service.projection_series(&location, metric) {
        Ok(points) => {
            let body = ProjectionResponse {
                location: location.label(),
                metric,
                label: metric.label(),
                points,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => assessment_error_response(&error),
    }
}

pub(crate) async fn score_handler(
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(&rejection),
    };

    match assess(&request.low_emissions, &request.high_emissions) {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(error) => score_error_response(&error),
    }
}

fn assessment_error_response(error: &AssessmentError) -> Response {
    let status = match error {
        AssessmentError::Scoring { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        error if error.is_not_found() => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}

fn score_error_response(error: &ScoreError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

fn rejection_response(rejection: &JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
    });
    (rejection.status(), Json(payload)).into_response()
}
