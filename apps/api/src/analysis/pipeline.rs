//! Analysis pipeline: the single entry point used by the HTTP layer.
//!
//! Flow: parse payload → normalize → resolve interests → generate report.
//! One sequential unit of work; the only await point is the optional gateway call.

use serde::Deserialize;
use tracing::info;

use crate::analysis::models::{AnalysisResult, ReportMode};
use crate::analysis::normalizer::{extract_interests, normalize, RawPayload};
use crate::analysis::report::generate_report;
use crate::analysis::tables::ScoringTables;
use crate::analysis::AnalysisError;
use crate::llm_client::{CompletionGateway, Credential};

/// Request body for an analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub payload: RawPayload,
    /// Overrides the payload's own `interests` list when present.
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub mode: ReportMode,
}

/// Runs one analysis. The credential is borrowed for the duration of the call only.
pub async fn analyze(
    request: AnalysisRequest,
    credential: Option<&Credential>,
    gateway: &dyn CompletionGateway,
    tables: &ScoringTables,
) -> Result<AnalysisResult, AnalysisError> {
    let payload = request.payload.into_value()?;
    let traits = normalize(&payload)?;

    let interests: Vec<String> = match request.interests {
        Some(explicit) => explicit
            .into_iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect(),
        None => extract_interests(&payload),
    };

    info!(
        "Analyzing {} traits with {} interests (mode: {:?})",
        traits.len(),
        interests.len(),
        request.mode
    );

    let result = generate_report(
        &traits,
        &interests,
        request.mode,
        credential,
        gateway,
        tables,
    )
    .await?;

    info!(
        "Analysis {} complete: archetype={:?}, {} recommendations",
        result.analysis_id,
        result.archetype,
        result.career_recommendations.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubGateway;
    use serde_json::json;

    const SAMPLE_TEXT: &str = r#"{
        "testName": "Career Aptitude Assessment",
        "studentName": "Alex Johnson",
        "scores": {
            "analytical": 85,
            "creative": 92,
            "interpersonal": 78,
            "practical": 65,
            "verbal": 88,
            "numerical": 72
        },
        "interests": ["technology", "science"]
    }"#;

    fn request(payload: RawPayload, mode: ReportMode) -> AnalysisRequest {
        AnalysisRequest {
            payload,
            interests: None,
            mode,
        }
    }

    fn value_of(result: &AnalysisResult, career: &str) -> u8 {
        result
            .career_matches
            .iter()
            .find(|m| m.name == career)
            .map(|m| m.value)
            .unwrap()
    }

    #[tokio::test]
    async fn test_sample_payload_local() {
        let gateway = StubGateway::text("unused");
        let result = analyze(
            request(RawPayload::Text(SAMPLE_TEXT.to_string()), ReportMode::Local),
            None,
            &gateway,
            &ScoringTables::default(),
        )
        .await
        .unwrap();

        let aptitudes: Vec<&str> = result
            .aptitude_scores
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(
            aptitudes,
            vec!["analytical", "creative", "interpersonal", "practical", "verbal", "numerical"]
        );
        assert!(result
            .summary
            .contains("creative, verbal and analytical"));
        // Base 50, aptitude +20 and interest +10 at minimum.
        assert!(value_of(&result, "Software Developer") >= 80);
        assert_eq!(value_of(&result, "Research Scientist"), 80);
    }

    #[tokio::test]
    async fn test_payload_interests_are_used_when_not_overridden() {
        let gateway = StubGateway::text("unused");
        let tables = ScoringTables::default();

        let with_payload_interests = analyze(
            request(RawPayload::Text(SAMPLE_TEXT.to_string()), ReportMode::Local),
            None,
            &gateway,
            &tables,
        )
        .await
        .unwrap();

        let mut overridden = request(RawPayload::Text(SAMPLE_TEXT.to_string()), ReportMode::Local);
        overridden.interests = Some(vec![]);
        let without_interests = analyze(overridden, None, &gateway, &tables).await.unwrap();

        assert_eq!(value_of(&with_payload_interests, "Research Scientist"), 80);
        assert_eq!(value_of(&without_interests, "Research Scientist"), 70);
    }

    #[tokio::test]
    async fn test_malformed_text_fails_before_gateway() {
        let gateway = StubGateway::text("- Teacher");
        let credential = Credential::new("sk-test").unwrap();
        let err = analyze(
            request(RawPayload::Text("{not json".to_string()), ReportMode::Delegated),
            Some(&credential),
            &gateway,
            &ScoringTables::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidFormat(_)));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_unrecognized_schema_fails() {
        let gateway = StubGateway::text("- Teacher");
        let err = analyze(
            request(
                RawPayload::Structured(json!({"studentName": "Alex", "age": 16})),
                ReportMode::Local,
            ),
            None,
            &gateway,
            &ScoringTables::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaNotRecognized));
    }

    #[tokio::test]
    async fn test_delegated_empty_generation_fails() {
        let gateway = StubGateway::text("");
        let credential = Credential::new("sk-test").unwrap();
        let err = analyze(
            request(RawPayload::Text(SAMPLE_TEXT.to_string()), ReportMode::Delegated),
            Some(&credential),
            &gateway,
            &ScoringTables::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyGenerationResult));
        assert_eq!(gateway.calls(), 1);
    }

    #[test]
    fn test_request_deserialization_defaults() {
        let request: AnalysisRequest =
            serde_json::from_value(json!({"payload": {"scores": {"verbal": 1}}})).unwrap();
        assert_eq!(request.mode, ReportMode::Local);
        assert!(request.interests.is_none());
        assert!(matches!(request.payload, RawPayload::Structured(_)));

        let request: AnalysisRequest = serde_json::from_value(json!({
            "payload": "{\"scores\": {\"verbal\": 1}}",
            "interests": ["arts"],
            "mode": "delegated"
        }))
        .unwrap();
        assert_eq!(request.mode, ReportMode::Delegated);
        assert!(matches!(request.payload, RawPayload::Text(_)));
    }
}
