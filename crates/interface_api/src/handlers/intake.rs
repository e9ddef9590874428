//! Intake request handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{IntakeRequestId, OperationMetadata};
use domain_intake::SubmissionPort;

use crate::auth::{has_role, permissions, require_role, Claims};
use crate::dto::intake::*;
use crate::{error::ApiError, AppState};

/// Accepts a completed intake request.
///
/// The payload is rebuilt through the same reducer and step validators the
/// wizard runs, so a client cannot skip a required field or send values the
/// form would have cleared.
pub async fn create_intake_request(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateIntakeRequest>,
) -> Result<(StatusCode, Json<IntakeReceiptResponse>), ApiError> {
    require_role(&claims, permissions::INTAKE_SUBMIT)?;
    request.validate()?;
    request.check_limits(&state.config.intake)?;

    let submission = request.into_submission()?;
    if let Err(e) = submission.verify(&state.config.intake) {
        warn!(user = %claims.sub, error = %e, "Intake request rejected");
        return Err(e.into());
    }

    let metadata = OperationMetadata::default()
        .initiated_by(claims.sub.clone())
        .with_context("documents", submission.document_count().to_string());
    let receipt = state.registry.submit(submission, Some(metadata)).await?;

    info!(user = %claims.sub, request_number = %receipt.request_number, "Intake request created");
    Ok((StatusCode::CREATED, Json(IntakeReceiptResponse::from(&receipt))))
}

/// Lists requests; claimants see their own, adjusters see all
pub async fn list_intake_requests(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<IntakeSummaryResponse>>, ApiError> {
    let subject = (!has_role(&claims, permissions::INTAKE_READ_ALL)).then_some(claims.sub.as_str());
    let records = state.registry.list(subject).await;
    Ok(Json(records.iter().map(IntakeSummaryResponse::from).collect()))
}

/// Gets a request by ID
pub async fn get_intake_request(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<Json<IntakeDetailResponse>, ApiError> {
    let record = state.registry.get(IntakeRequestId::from_uuid(id)).await?;

    let owns = record.submitted_by.as_deref() == Some(claims.sub.as_str());
    if !owns && !has_role(&claims, permissions::INTAKE_READ_ALL) {
        // Someone else's request looks the same as a missing one
        return Err(ApiError::NotFound(format!("Intake request {id} not found")));
    }
    Ok(Json(record.into()))
}
