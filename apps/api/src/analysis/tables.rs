//! Static lookup data for career scoring and report phrasing.
//!
//! Built once at startup (`ScoringTables::default()`) and shared read-only
//! through `Arc`. All keys are lowercase; lookups lowercase the trait name.

use std::collections::HashMap;

use crate::analysis::models::Archetype;

/// Every career that receives a match score, in display order for ties.
const CANDIDATE_CAREERS: &[&str] = &[
    "Software Developer",
    "Research Scientist",
    "Data Analyst",
    "Engineer",
    "Graphic Designer",
    "Architect",
    "Writer",
    "Teacher",
    "Counselor",
    "Healthcare Professional",
    "Lawyer",
    "Marketing Specialist",
];

/// Aptitude name → careers that earn the aptitude bonus when the score clears the threshold.
const APTITUDE_CAREERS: &[(&str, &[&str])] = &[
    (
        "analytical",
        &["Software Developer", "Research Scientist", "Data Analyst", "Lawyer"],
    ),
    (
        "numerical",
        &["Data Analyst", "Engineer", "Software Developer"],
    ),
    (
        "creative",
        &["Graphic Designer", "Architect", "Writer", "Marketing Specialist"],
    ),
    ("verbal", &["Writer", "Teacher", "Lawyer", "Marketing Specialist"]),
    (
        "interpersonal",
        &["Teacher", "Counselor", "Healthcare Professional", "Marketing Specialist"],
    ),
    ("practical", &["Engineer", "Architect", "Healthcare Professional"]),
];

/// Interest keyword → careers that earn the interest bonus. An interest matches
/// a keyword when one of its words is the keyword or its plural.
const INTEREST_CAREERS: &[(&str, &[&str])] = &[
    ("technology", &["Software Developer", "Data Analyst", "Engineer"]),
    ("science", &["Research Scientist", "Healthcare Professional", "Engineer"]),
    ("art", &["Graphic Designer", "Architect", "Writer"]),
    ("design", &["Graphic Designer", "Architect"]),
    ("helping", &["Counselor", "Teacher", "Healthcare Professional"]),
    ("business", &["Marketing Specialist", "Data Analyst", "Lawyer"]),
    ("writing", &["Writer", "Marketing Specialist"]),
    ("health", &["Healthcare Professional", "Counselor"]),
];

const STRENGTH_PHRASES: &[(&str, &str)] = &[
    ("analytical", "Strong analytical reasoning and problem-solving"),
    ("numerical", "Confident working with numbers, data, and quantitative problems"),
    ("creative", "Original thinking and a talent for generating new ideas"),
    ("verbal", "Clear, persuasive written and spoken communication"),
    ("interpersonal", "Building relationships and working well with others"),
    ("practical", "Hands-on skill at turning plans into working results"),
    ("openness", "Curiosity and openness to new experiences"),
    ("conscientiousness", "Reliability, organization, and follow-through"),
    ("extraversion", "Energy and confidence in social settings"),
    ("agreeableness", "Empathy and a cooperative approach to teamwork"),
];

const GROWTH_PHRASES: &[(&str, &str)] = &[
    ("analytical", "Practice breaking complex problems into logical steps"),
    ("numerical", "Build comfort with data through statistics or budgeting exercises"),
    ("creative", "Make room for brainstorming and open-ended creative projects"),
    ("verbal", "Strengthen communication through writing, reading, and presenting"),
    ("interpersonal", "Seek out group projects to grow collaboration and listening skills"),
    ("practical", "Gain hands-on experience through labs, workshops, or internships"),
    ("openness", "Try unfamiliar activities to broaden your perspective"),
    ("conscientiousness", "Use planners and routines to strengthen follow-through"),
    ("extraversion", "Practice speaking up in small groups to build confidence"),
    ("agreeableness", "Work on seeing situations from other people's point of view"),
];

/// Ordered archetype rules. Each rule passes when every named trait scores
/// strictly above its threshold. First passing rule wins.
const ARCHETYPE_RULES: &[(Archetype, &[(&str, u8)])] = &[
    (
        Archetype::AnalyticalThinker,
        &[("analytical", 75), ("numerical", 70)],
    ),
    (
        Archetype::CreativeCommunicator,
        &[("creative", 75), ("verbal", 75)],
    ),
    (
        Archetype::PeopleOrientedCollaborator,
        &[("interpersonal", 75), ("verbal", 60)],
    ),
    (Archetype::HandsOnProblemSolver, &[("practical", 75)]),
];

/// One archetype rule: a conjunction of `(trait, minimum-exclusive)` thresholds.
#[derive(Debug, Clone)]
pub struct ArchetypeRule {
    pub archetype: Archetype,
    pub thresholds: Vec<(String, u8)>,
}

/// Read-only tables consulted by the ranking engine and report generator.
#[derive(Debug, Clone)]
pub struct ScoringTables {
    pub careers: Vec<String>,
    pub aptitude_careers: HashMap<String, Vec<String>>,
    /// Kept as an ordered list: interests are matched by substring, not by key.
    pub interest_careers: Vec<(String, Vec<String>)>,
    pub strength_phrases: HashMap<String, String>,
    pub growth_phrases: HashMap<String, String>,
    pub archetype_rules: Vec<ArchetypeRule>,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            careers: owned(CANDIDATE_CAREERS),
            aptitude_careers: APTITUDE_CAREERS
                .iter()
                .map(|(k, careers)| (k.to_string(), owned(careers)))
                .collect(),
            interest_careers: INTEREST_CAREERS
                .iter()
                .map(|(k, careers)| (k.to_string(), owned(careers)))
                .collect(),
            strength_phrases: phrase_map(STRENGTH_PHRASES),
            growth_phrases: phrase_map(GROWTH_PHRASES),
            archetype_rules: ARCHETYPE_RULES
                .iter()
                .map(|(archetype, thresholds)| ArchetypeRule {
                    archetype: *archetype,
                    thresholds: thresholds
                        .iter()
                        .map(|(name, min)| (name.to_string(), *min))
                        .collect(),
                })
                .collect(),
        }
    }
}

impl ScoringTables {
    pub fn strength_phrase(&self, trait_name: &str) -> String {
        self.strength_phrases
            .get(&trait_name.to_lowercase())
            .cloned()
            .unwrap_or_else(|| format!("Your {trait_name} skills are a notable strength"))
    }

    pub fn growth_phrase(&self, trait_name: &str) -> String {
        self.growth_phrases
            .get(&trait_name.to_lowercase())
            .cloned()
            .unwrap_or_else(|| format!("Develop your {trait_name} skills further"))
    }

    pub fn careers_for_aptitude(&self, trait_name: &str) -> &[String] {
        self.aptitude_careers
            .get(&trait_name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn phrase_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
