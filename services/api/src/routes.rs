use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use ghosthire::applications::{application_router, ApplicationRepository, ApplicationService};
use ghosthire::eligibility::{
    ApplicantProfile, DisclosureChoices, EligibilityClaim, EligibilityEngine, JobPosting,
    PrivacyAssessment,
};
use ghosthire::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Stateless preview: nothing is stored and no duplicate check runs.
#[derive(Debug, Deserialize)]
pub(crate) struct ClaimPreviewRequest {
    pub(crate) profile: ApplicantProfile,
    pub(crate) job: JobPosting,
    #[serde(default)]
    pub(crate) disclosure: DisclosureChoices,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClaimPreviewResponse {
    pub(crate) claim: EligibilityClaim,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) privacy_breakdown: Option<PrivacyAssessment>,
}

pub(crate) fn with_application_routes<R>(service: Arc<ApplicationService<R>>) -> axum::Router
where
    R: ApplicationRepository + 'static,
{
    application_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/eligibility/preview",
            axum::routing::post(claim_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn claim_preview_endpoint(
    Extension(engine): Extension<Arc<EligibilityEngine>>,
    Json(payload): Json<ClaimPreviewRequest>,
) -> Result<Json<ClaimPreviewResponse>, AppError> {
    let ClaimPreviewRequest {
        profile,
        job,
        disclosure,
    } = payload;

    let claim = engine.assemble_claim(&profile, &job, disclosure)?;
    let privacy_breakdown = if claim.eligible {
        Some(
            engine
                .scorer()
                .assess(&profile, &job.requirements, disclosure)?,
        )
    } else {
        None
    };

    Ok(Json(ClaimPreviewResponse {
        claim,
        privacy_breakdown,
    }))
}
