use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::AnalysisError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Body extraction failures get the same error envelope as everything else.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Analysis(e) => match e {
                AnalysisError::InvalidFormat(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_FORMAT", e.to_string())
                }
                AnalysisError::SchemaNotRecognized => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "SCHEMA_NOT_RECOGNIZED",
                    e.to_string(),
                ),
                AnalysisError::MissingCredential => {
                    (StatusCode::UNAUTHORIZED, "MISSING_CREDENTIAL", e.to_string())
                }
                AnalysisError::GatewayFailure(msg) => {
                    tracing::error!("Gateway failure: {msg}");
                    (
                        StatusCode::BAD_GATEWAY,
                        "GATEWAY_FAILURE",
                        "The recommendation service could not be reached".to_string(),
                    )
                }
                AnalysisError::EmptyGenerationResult => {
                    tracing::error!("Gateway returned no usable text");
                    (
                        StatusCode::BAD_GATEWAY,
                        "EMPTY_GENERATION_RESULT",
                        e.to_string(),
                    )
                }
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
