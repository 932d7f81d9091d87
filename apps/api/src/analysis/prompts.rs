// All LLM prompt constants for the analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::{json, Value};

use crate::analysis::models::TraitScore;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, PLAIN_LIST_INSTRUCTION};
use crate::llm_client::ChatPrompt;

/// System message: counselor persona and behavioural limits.
pub const CAREER_COUNSELOR_SYSTEM: &str = "You are a career counselor helping students \
    understand their personality traits and potential career paths. \
    Be encouraging, concrete, and age-appropriate. \
    Never give medical or psychological diagnoses.";

/// User message template. Replace: {plain_list_instruction}, {grounding_instruction},
/// {traits_json}, {interests_json}
pub const CAREER_RECOMMENDATION_PROMPT: &str = r#"Analyze these personality traits and provide career recommendations.

TRAITS (scores are 0-100):
{traits_json}

INTERESTS:
{interests_json}

{grounding_instruction}

{plain_list_instruction}

Recommend between 3 and 6 careers. For each, give the career title followed by a short reason tied to the scores."#;

/// Builds the two-message prompt. Trait data is embedded verbatim as pretty JSON.
pub fn build_recommendation_prompt(traits: &[TraitScore], interests: &[String]) -> ChatPrompt {
    let traits_json = Value::Array(
        traits
            .iter()
            .map(|t| json!({ "name": t.name, "score": t.score, "description": t.description }))
            .collect(),
    );
    let traits_json = format!("{traits_json:#}");
    let interests_json = Value::from(interests.to_vec()).to_string();

    let user = CAREER_RECOMMENDATION_PROMPT
        .replace("{plain_list_instruction}", PLAIN_LIST_INSTRUCTION)
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{interests_json}", &interests_json)
        .replace("{traits_json}", &traits_json);

    ChatPrompt {
        system: CAREER_COUNSELOR_SYSTEM.to_string(),
        user,
    }
}
