use crate::error::AppError;
use crate::models::ReferenceListResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use risk_engine::AssessmentRequest;
use types::ids::AssessmentId;
use types::record::AssessmentRecord;

/// Header naming the assessor; attached to the record as `created_by`
pub const ASSESSOR_HEADER: &str = "x-assessor";

pub async fn create_assessment(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AssessmentRecord>), AppError> {
    // 1. Body must be a well-formed request
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    // 2. Identity of the assessor, if the caller supplied one
    let created_by = headers
        .get(ASSESSOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    // 3. Validate and evaluate; missing answers surface as 422
    let record = state.engine.assess(payload, Utc::now(), created_by)?;

    // 4. Persist
    state.store.insert(record.clone());
    tracing::info!(
        id = %record.id,
        reference = %record.reference,
        risk = %record.risk,
        "Assessment created"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AssessmentRecord>, AppError> {
    let id: AssessmentId = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid assessment id: {id}")))?;

    let record = state
        .store
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Assessment {id}")))?;

    // Stored ratings must still follow from the stored answers
    state.engine.audit(&record)?;

    Ok(Json(record))
}

pub async fn list_by_reference(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Json<ReferenceListResponse> {
    let assessments = state.store.find_by_reference(&reference);
    tracing::debug!(reference = %reference, count = assessments.len(), "Reference lookup");

    Json(ReferenceListResponse {
        reference,
        assessments,
    })
}
