use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const UNKNOWN_TRAIT_NAME: &str = "Unknown Trait";
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// A single normalized trait. `score` is always within 0–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScore {
    pub name: String,
    pub score: u8,
    pub description: String,
}

/// Chart-ready projection of a trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptitudeScore {
    pub name: String,
    pub value: u8,
}

impl From<&TraitScore> for AptitudeScore {
    fn from(t: &TraitScore) -> Self {
        Self {
            name: t.name.clone(),
            value: t.score,
        }
    }
}

/// Match strength for one candidate career. `value` is always within 30–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub name: String,
    pub value: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Rule-based report from the static tables. No network I/O.
    #[default]
    Local,
    /// Narrative recommendations come from the completion service.
    Delegated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    AnalyticalThinker,
    CreativeCommunicator,
    PeopleOrientedCollaborator,
    HandsOnProblemSolver,
    VersatileAdapter,
}

/// The pipeline's sole output. Built once per analysis and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub source: ReportMode,
    pub archetype: Archetype,
    pub summary: String,
    /// De-duplicated, at most `MAX_CAREER_RECOMMENDATIONS` entries.
    pub career_recommendations: Vec<String>,
    /// Verbatim completion text; present only for delegated reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    pub strengths: Vec<String>,
    pub areas_of_growth: Vec<String>,
    pub personality_insights: Vec<TraitScore>,
    pub aptitude_scores: Vec<AptitudeScore>,
    pub career_matches: Vec<CareerMatch>,
}
