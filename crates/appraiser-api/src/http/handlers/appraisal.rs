//! Appraisal endpoint.
//!
//! POST /api/appraise/ - Appraise one asset from its `nftContent`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use appraiser_core::service::appraisal;
use appraiser_types::appraisal::{AppraisalRequest, AppraisalResult};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/appraise/ - Run one appraisal.
///
/// Body rejections are taken as a `Result` so they surface through
/// [`AppError::MalformedBody`] instead of axum's plain-text defaults.
pub async fn appraise(
    State(state): State<AppState>,
    body: Result<Json<AppraisalRequest>, JsonRejection>,
) -> Result<Json<AppraisalResult>, AppError> {
    let request_id = uuid::Uuid::now_v7();
    let Json(request) = body.inspect_err(|rejection| {
        tracing::debug!(%request_id, "Rejected appraisal body: {rejection}");
    })?;

    let result = appraisal::appraise(&request, state.score_source.as_ref()).inspect_err(|e| {
        tracing::debug!(%request_id, "Rejected appraisal: {e}");
    })?;

    tracing::debug!(
        %request_id,
        content_len = request.content.as_deref().map_or(0, str::len),
        overall = %result.overall_score,
        "Appraisal complete"
    );

    Ok(Json(result))
}
