// Career aptitude analysis.
// Flow: normalize payload → rank traits → local or delegated report.
// All LLM calls go through llm_client; no direct HTTP calls here.

use thiserror::Error;

use crate::llm_client::LlmError;

pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
pub mod ranking;
pub mod report;
pub mod tables;

/// Every way an analysis can fail. None of these are retried or replaced with
/// placeholder output; the caller decides how to surface them.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Test results are not valid JSON: {0}")]
    InvalidFormat(String),

    #[error("No traits, personality, scores, or questions found in test results")]
    SchemaNotRecognized,

    #[error("Delegated analysis requires an API key")]
    MissingCredential,

    #[error("Recommendation service failed: {0}")]
    GatewayFailure(String),

    #[error("Recommendation service returned no usable text")]
    EmptyGenerationResult,
}

impl From<LlmError> for AnalysisError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent | LlmError::Unusable(_) => AnalysisError::EmptyGenerationResult,
            other => AnalysisError::GatewayFailure(other.to_string()),
        }
    }
}
