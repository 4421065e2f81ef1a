use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{ApplicationId, ApplicationRequest, JobDraft};
use super::repository::{ApplicationRepository, ApplicationView, RepositoryError};
use super::service::{ApplicationService, ApplicationServiceError, SubmissionOutcome};
use crate::eligibility::JobId;

/// Router builder exposing job posting and application endpoints.
pub fn application_router<R>(service: Arc<ApplicationService<R>>) -> Router
where
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route("/api/v1/jobs", post(post_job_handler::<R>))
        .route("/api/v1/jobs/:job_id", get(job_handler::<R>))
        .route(
            "/api/v1/jobs/:job_id/applications",
            post(submit_handler::<R>).get(job_applications_handler::<R>),
        )
        .route(
            "/api/v1/applications/:application_id",
            get(status_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn post_job_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    axum::Json(draft): axum::Json<JobDraft>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.post_job(draft) {
        Ok(posting) => (StatusCode::CREATED, axum::Json(posting)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn job_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    Path(job_id): Path<u64>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.job(JobId(job_id)) {
        Ok(posting) => (StatusCode::OK, axum::Json(posting)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    Path(job_id): Path<u64>,
    axum::Json(request): axum::Json<ApplicationRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.submit(JobId(job_id), request) {
        Ok(SubmissionOutcome::Accepted(record)) => {
            (StatusCode::ACCEPTED, axum::Json(record.view())).into_response()
        }
        Ok(SubmissionOutcome::Rejected(claim)) => {
            (StatusCode::OK, axum::Json(claim)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn job_applications_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    Path(job_id): Path<u64>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.applications_for_job(JobId(job_id)) {
        Ok(records) => {
            let views = records
                .iter()
                .map(|record| record.view())
                .collect::<Vec<ApplicationView>>();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.get(&ApplicationId(application_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ApplicationServiceError) -> Response {
    let status = match &error {
        ApplicationServiceError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationServiceError::UnknownJob(_)
        | ApplicationServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationServiceError::DuplicateApplication(_)
        | ApplicationServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ApplicationServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
