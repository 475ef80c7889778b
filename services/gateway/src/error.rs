use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use types::errors::AssessmentError;

/// Central error type for the Gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            AppError::Assessment(err) => match &err {
                AssessmentError::MissingFields { fields } => {
                    let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "MISSING_FIELDS",
                        err.to_string(),
                        Some(names),
                    )
                }
                AssessmentError::InvalidDomain { .. } | AssessmentError::RecordMismatch { .. } => {
                    // Table wiring defect: never shown to the caller
                    tracing::error!(error = %err, "Assessment pipeline defect");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "Internal server error".to_string(),
                        None,
                    )
                }
            },
        };

        let mut body = json!({
            "error": code,
            "message": message
        });
        if let Some(fields) = fields {
            body["fields"] = json!(fields);
        }

        (status, Json(body)).into_response()
    }
}
