//! Schema Normalizer: turns loosely-structured test results into `TraitScore`s.
//!
//! Survey engines emit different shapes. Recognized, in priority order:
//! 1. `traits`: `[{name|trait, score|value, description?}]`
//! 2. `personality`: same record format as `traits`
//! 3. `scores`: `{ "<name>": <number> }`
//! 4. `questions`: `[{trait|name, score|value}]`, averaged per trait
//!
//! The first non-empty shape wins. Shapes are never merged.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::analysis::models::{TraitScore, DEFAULT_DESCRIPTION, UNKNOWN_TRAIT_NAME};
use crate::analysis::AnalysisError;

/// Caller-supplied test results: JSON text, or an already-parsed value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPayload {
    Text(String),
    Structured(Value),
}

impl RawPayload {
    /// Parses text payloads. Structured payloads pass through untouched.
    pub fn into_value(self) -> Result<Value, AnalysisError> {
        match self {
            RawPayload::Text(text) => serde_json::from_str(&text)
                .map_err(|e| AnalysisError::InvalidFormat(e.to_string())),
            RawPayload::Structured(value) => Ok(value),
        }
    }
}

/// The recognized trait-bearing shapes, each with its own extraction rule.
#[derive(Debug)]
enum PayloadShape<'a> {
    Traits(&'a [Value]),
    Personality(&'a [Value]),
    Scores(&'a Map<String, Value>),
    Questions(&'a [Value]),
}

impl<'a> PayloadShape<'a> {
    fn detect(payload: &'a Value) -> Option<Self> {
        let obj = payload.as_object()?;

        if let Some(items) = non_empty_array(obj, "traits") {
            return Some(PayloadShape::Traits(items));
        }
        if let Some(items) = non_empty_array(obj, "personality") {
            return Some(PayloadShape::Personality(items));
        }
        if let Some(map) = obj.get("scores").and_then(Value::as_object) {
            if !map.is_empty() {
                return Some(PayloadShape::Scores(map));
            }
        }
        if let Some(items) = non_empty_array(obj, "questions") {
            return Some(PayloadShape::Questions(items));
        }
        None
    }

    fn label(&self) -> &'static str {
        match self {
            PayloadShape::Traits(_) => "traits",
            PayloadShape::Personality(_) => "personality",
            PayloadShape::Scores(_) => "scores",
            PayloadShape::Questions(_) => "questions",
        }
    }

    fn into_traits(self) -> Vec<TraitScore> {
        match self {
            PayloadShape::Traits(items) | PayloadShape::Personality(items) => {
                items.iter().map(trait_from_record).collect()
            }
            PayloadShape::Scores(map) => map
                .iter()
                .map(|(name, raw)| {
                    let name = non_blank(name).unwrap_or(UNKNOWN_TRAIT_NAME).to_string();
                    let score = score_from_value(raw).unwrap_or(0);
                    TraitScore {
                        description: format!("Your {name} aptitude score is {score}"),
                        name,
                        score,
                    }
                })
                .collect(),
            PayloadShape::Questions(items) => traits_from_questions(items),
        }
    }
}

/// Normalizes a parsed payload into an ordered list of traits.
///
/// Fails only when no recognized shape is present. Missing sub-fields fall back
/// to defaults: name `"Unknown Trait"`, score 0, `"No description available"`.
pub fn normalize(payload: &Value) -> Result<Vec<TraitScore>, AnalysisError> {
    let shape = PayloadShape::detect(payload).ok_or(AnalysisError::SchemaNotRecognized)?;
    let label = shape.label();
    let traits = shape.into_traits();
    debug!("Normalized {} traits from '{}' shape", traits.len(), label);
    Ok(traits)
}

/// Reads the optional `interests` list. Non-string and blank entries are skipped.
pub fn extract_interests(payload: &Value) -> Vec<String> {
    payload
        .get("interests")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .filter_map(non_blank)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn non_empty_array<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a [Value]> {
    obj.get(key)
        .and_then(Value::as_array)
        .filter(|arr| !arr.is_empty())
        .map(Vec::as_slice)
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// First non-blank string among `keys`.
fn first_str<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| obj.get(*k).and_then(Value::as_str))
        .find_map(non_blank)
}

/// First numeric score among `keys`, rounded and clamped.
fn first_score(obj: &Map<String, Value>, keys: &[&str]) -> Option<u8> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find_map(score_from_value)
}

/// Non-numeric values are treated as absent.
fn score_from_value(value: &Value) -> Option<u8> {
    value.as_f64().filter(|v| v.is_finite()).map(clamp_score)
}

pub fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

fn trait_from_record(record: &Value) -> TraitScore {
    match record {
        Value::Object(obj) => TraitScore {
            name: first_str(obj, &["name", "trait"])
                .unwrap_or(UNKNOWN_TRAIT_NAME)
                .to_string(),
            score: first_score(obj, &["score", "value"]).unwrap_or(0),
            description: first_str(obj, &["description"])
                .unwrap_or(DEFAULT_DESCRIPTION)
                .to_string(),
        },
        Value::String(name) => TraitScore {
            name: non_blank(name).unwrap_or(UNKNOWN_TRAIT_NAME).to_string(),
            score: 0,
            description: DEFAULT_DESCRIPTION.to_string(),
        },
        _ => TraitScore {
            name: UNKNOWN_TRAIT_NAME.to_string(),
            score: 0,
            description: DEFAULT_DESCRIPTION.to_string(),
        },
    }
}

/// Groups questions by trait (first-appearance order) and averages their scores.
fn traits_from_questions(items: &[Value]) -> Vec<TraitScore> {
    let mut groups: Vec<(String, Vec<u8>)> = Vec::new();

    for item in items {
        let (name, score) = match item.as_object() {
            Some(obj) => (
                first_str(obj, &["trait", "name"]).unwrap_or(UNKNOWN_TRAIT_NAME),
                first_score(obj, &["score", "value"]).unwrap_or(0),
            ),
            None => (UNKNOWN_TRAIT_NAME, 0),
        };

        match groups.iter_mut().find(|(n, _)| n == name) {
            Some((_, scores)) => scores.push(score),
            None => groups.push((name.to_string(), vec![score])),
        }
    }

    groups
        .into_iter()
        .map(|(name, scores)| {
            let count = scores.len();
            let sum: f64 = scores.iter().map(|s| f64::from(*s)).sum();
            let score = clamp_score(sum / count as f64);
            let noun = if count == 1 { "question" } else { "questions" };
            TraitScore {
                description: format!("Your {name} score across {count} {noun} is {score}"),
                name,
                score,
            }
        })
        .collect()
}
