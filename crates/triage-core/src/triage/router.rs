use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{CaseId, CheckInSubmission};
use super::quick::{quick_score, QuickAssessment};
use super::repository::{CaseRepository, EscalationNotifier, RepositoryError};
use super::service::{TriageCaseService, TriageServiceError};

/// Router builder exposing HTTP endpoints for check-in, triage, and the
/// quick scorer.
pub fn triage_router<R, N>(service: Arc<TriageCaseService<R, N>>) -> Router
where
    R: CaseRepository + 'static,
    N: EscalationNotifier + 'static,
{
    Router::new()
        .route("/api/v1/triage/cases", post(check_in_handler::<R, N>))
        .route(
            "/api/v1/triage/cases/:case_id",
            get(case_status_handler::<R, N>),
        )
        .route(
            "/api/v1/triage/cases/:case_id/evaluate",
            post(evaluate_handler::<R, N>),
        )
        .route("/api/v1/triage/quick-score", post(quick_score_handler))
        .with_state(service)
}

pub(crate) async fn check_in_handler<R, N>(
    State(service): State<Arc<TriageCaseService<R, N>>>,
    axum::Json(submission): axum::Json<CheckInSubmission>,
) -> Response
where
    R: CaseRepository + 'static,
    N: EscalationNotifier + 'static,
{
    match service.check_in(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn evaluate_handler<R, N>(
    State(service): State<Arc<TriageCaseService<R, N>>>,
    Path(case_id): Path<String>,
) -> Response
where
    R: CaseRepository + 'static,
    N: EscalationNotifier + 'static,
{
    let id = CaseId(case_id);
    match service.triage(&id) {
        Ok(disposition) => (StatusCode::OK, axum::Json(disposition)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn case_status_handler<R, N>(
    State(service): State<Arc<TriageCaseService<R, N>>>,
    Path(case_id): Path<String>,
) -> Response
where
    R: CaseRepository + 'static,
    N: EscalationNotifier + 'static,
{
    let id = CaseId(case_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn quick_score_handler(
    axum::Json(assessment): axum::Json<QuickAssessment>,
) -> Response {
    let score = quick_score(&assessment);
    let payload = json!({ "score": score.label() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn error_response(error: TriageServiceError) -> Response {
    let status = match &error {
        TriageServiceError::Intake(_) => StatusCode::UNPROCESSABLE_ENTITY,
        TriageServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        TriageServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
