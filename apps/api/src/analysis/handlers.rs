//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::models::{AnalysisResult, TraitScore};
use crate::analysis::normalizer::{extract_interests, normalize, RawPayload};
use crate::analysis::pipeline::{analyze, AnalysisRequest};
use crate::errors::AppError;
use crate::llm_client::Credential;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub payload: RawPayload,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub traits: Vec<TraitScore>,
    pub interests: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Runs the full pipeline. Delegated mode reads the caller's API key from
/// `Authorization: Bearer <key>`; the key is dropped when the request ends.
pub async fn handle_analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = request?;
    let credential = bearer_credential(&headers)?;

    let result = analyze(
        request,
        credential.as_ref(),
        state.gateway.as_ref(),
        &state.tables,
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/v1/analysis/normalize
///
/// Previews normalization without scoring, so a front end can show which
/// traits were recognized before submitting.
pub async fn handle_normalize(
    request: Result<Json<NormalizeRequest>, JsonRejection>,
) -> Result<Json<NormalizeResponse>, AppError> {
    let Json(request) = request?;
    let payload = request.payload.into_value()?;
    let traits = normalize(&payload)?;

    Ok(Json(NormalizeResponse {
        traits,
        interests: extract_interests(&payload),
    }))
}

/// Missing header or empty key → `None`. A present header must use the
/// Bearer scheme, matched case-insensitively.
fn bearer_credential(headers: &HeaderMap) -> Result<Option<Credential>, AppError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| AppError::Validation("Authorization header must be ASCII".to_string()))?
        .trim();

    let (scheme, key) = value.split_once(' ').unwrap_or((value, ""));
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::Validation(
            "Authorization header must use the Bearer scheme".to_string(),
        ));
    }

    Ok(Credential::new(key))
}
