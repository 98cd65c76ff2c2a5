//! Application error type mapping to HTTP status codes and the `{"error": ...}`
//! body the frontend expects.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use appraiser_types::error::AppraisalError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The appraisal itself refused the request.
    Appraisal(AppraisalError),
    /// The body never reached the appraisal: bad JSON, wrong content type,
    /// or a field of the wrong type.
    MalformedBody { status: StatusCode, message: String },
}

impl From<AppraisalError> for AppError {
    fn from(e: AppraisalError) -> Self {
        AppError::Appraisal(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Appraisal(e @ AppraisalError::InvalidInput) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::MalformedBody { status, message } => (status, message),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
