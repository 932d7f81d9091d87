//! Report Generator: assembles the `AnalysisResult` in local or delegated mode.
//!
//! Both modes share the locally computed structured fields (summary, strengths,
//! growth areas, aptitude scores, career matches). They differ only in where
//! `careerRecommendations` come from:
//! - local: the top career matches
//! - delegated: lines parsed from the completion text, which is also kept verbatim
//!
//! A delegated report never falls back to local recommendations or a placeholder.

use std::collections::HashSet;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::models::{AnalysisResult, AptitudeScore, ReportMode, TraitScore};
use crate::analysis::prompts::build_recommendation_prompt;
use crate::analysis::ranking::{
    classify_archetype, growth_areas, rank, strengths, summarize, RankedTraits,
    BASE_MATCH_SCORE,
};
use crate::analysis::tables::ScoringTables;
use crate::analysis::AnalysisError;
use crate::llm_client::{CompletionGateway, Credential};

pub const MAX_CAREER_RECOMMENDATIONS: usize = 6;

pub async fn generate_report(
    traits: &[TraitScore],
    interests: &[String],
    mode: ReportMode,
    credential: Option<&Credential>,
    gateway: &dyn CompletionGateway,
    tables: &ScoringTables,
) -> Result<AnalysisResult, AnalysisError> {
    match mode {
        ReportMode::Local => Ok(generate_local_report(traits, interests, tables)),
        ReportMode::Delegated => {
            let credential = credential.ok_or(AnalysisError::MissingCredential)?;
            generate_delegated_report(traits, interests, credential, gateway, tables).await
        }
    }
}

/// Deterministic report from the static tables. Cannot fail.
/// Only careers that earned at least one bonus are recommended, so the list
/// may be empty.
pub fn generate_local_report(
    traits: &[TraitScore],
    interests: &[String],
    tables: &ScoringTables,
) -> AnalysisResult {
    let ranked = rank(traits, interests, tables);
    let recommendations = dedupe_and_cap(
        ranked
            .career_matches
            .iter()
            .filter(|m| i32::from(m.value) > BASE_MATCH_SCORE)
            .map(|m| m.name.clone()),
    );
    assemble(traits, ranked, tables, ReportMode::Local, recommendations, None)
}

async fn generate_delegated_report(
    traits: &[TraitScore],
    interests: &[String],
    credential: &Credential,
    gateway: &dyn CompletionGateway,
    tables: &ScoringTables,
) -> Result<AnalysisResult, AnalysisError> {
    let ranked = rank(traits, interests, tables);

    let prompt = build_recommendation_prompt(traits, interests);

    info!(
        "Requesting narrative recommendations for {} traits",
        traits.len()
    );
    let narrative = gateway.complete(&prompt, credential).await?;

    if narrative.trim().is_empty() {
        return Err(AnalysisError::EmptyGenerationResult);
    }

    let recommendations = parse_recommendations(&narrative);
    if recommendations.is_empty() {
        return Err(AnalysisError::EmptyGenerationResult);
    }

    Ok(assemble(
        traits,
        ranked,
        tables,
        ReportMode::Delegated,
        recommendations,
        Some(narrative),
    ))
}

fn assemble(
    traits: &[TraitScore],
    ranked: RankedTraits,
    tables: &ScoringTables,
    source: ReportMode,
    career_recommendations: Vec<String>,
    narrative: Option<String>,
) -> AnalysisResult {
    let archetype = classify_archetype(traits, tables);

    AnalysisResult {
        analysis_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        source,
        archetype,
        summary: summarize(archetype, &ranked.top),
        career_recommendations,
        narrative,
        strengths: strengths(&ranked.top, tables),
        areas_of_growth: growth_areas(&ranked.bottom, tables),
        personality_insights: traits.to_vec(),
        aptitude_scores: traits.iter().map(AptitudeScore::from).collect(),
        career_matches: ranked.career_matches,
    }
}

/// Splits completion text into recommendation lines.
///
/// When any line carries a list marker (`-`, `*`, `•`, `1.`, `2)`), only marked
/// lines at the outermost indent are kept. Intro and outro sentences and
/// indented sub-bullets ("- Why: ...") are dropped. Otherwise every non-blank
/// line counts.
pub fn parse_recommendations(text: &str) -> Vec<String> {
    let lines: Vec<(Option<usize>, String)> = text
        .lines()
        .filter_map(|line| {
            let content = line.trim_start();
            let indent = line.len() - content.len();
            let (marked, rest) = strip_list_marker(content.trim_end());
            let rest = rest.replace("**", "").trim().to_string();
            (!rest.is_empty()).then(|| (marked.then_some(indent), rest))
        })
        .collect();

    let outer_indent = lines.iter().filter_map(|(indent, _)| *indent).min();

    dedupe_and_cap(
        lines
            .into_iter()
            .filter(|(indent, _)| outer_indent.is_none() || *indent == outer_indent)
            .map(|(_, line)| line),
    )
}

fn strip_list_marker(line: &str) -> (bool, &str) {
    if let Some(rest) = line.strip_prefix(['-', '*', '•']) {
        // "**Bold**" is emphasis, not a bullet.
        if !rest.starts_with('*') {
            return (true, rest.trim_start());
        }
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix(['.', ')']) {
            return (true, rest.trim_start());
        }
    }

    (false, line)
}

/// Case-insensitive de-duplication keeping first occurrences, then truncation.
fn dedupe_and_cap(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .take(MAX_CAREER_RECOMMENDATIONS)
        .collect()
}
