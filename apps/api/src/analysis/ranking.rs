//! Scoring & Ranking: deterministic, pure functions over normalized traits.
//!
//! Algorithm:
//! 1. top = stable sort by score descending, first 3
//! 2. bottom = stable sort by score ascending, first 2
//! 3. career matches: every candidate starts at 50
//!    - aptitude with score > 70 → +20 for each of its careers
//!    - interest with a word equal to a keyword → +10 for each of its careers
//!    - each (career, source) pair counts once; result clamped to 30–100
//! 4. archetype: first rule whose thresholds all pass

use std::collections::HashSet;

use crate::analysis::models::{Archetype, CareerMatch, TraitScore};
use crate::analysis::tables::ScoringTables;

pub const TOP_TRAIT_COUNT: usize = 3;
pub const BOTTOM_TRAIT_COUNT: usize = 2;

pub const BASE_MATCH_SCORE: i32 = 50;
const APTITUDE_BONUS: i32 = 20;
const INTEREST_BONUS: i32 = 10;
/// Aptitude bonus applies only when the score is strictly above this.
const APTITUDE_THRESHOLD: u8 = 70;
pub const MIN_MATCH_SCORE: i32 = 30;
pub const MAX_MATCH_SCORE: i32 = 100;

#[derive(Debug, Clone)]
pub struct RankedTraits {
    pub top: Vec<TraitScore>,
    pub bottom: Vec<TraitScore>,
    pub career_matches: Vec<CareerMatch>,
}

pub fn rank(traits: &[TraitScore], interests: &[String], tables: &ScoringTables) -> RankedTraits {
    RankedTraits {
        top: top_traits(traits, TOP_TRAIT_COUNT),
        bottom: bottom_traits(traits, BOTTOM_TRAIT_COUNT),
        career_matches: score_careers(traits, interests, tables),
    }
}

/// Highest scores first. Ties keep input order.
pub fn top_traits(traits: &[TraitScore], n: usize) -> Vec<TraitScore> {
    let mut sorted = traits.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted.truncate(n);
    sorted
}

/// Lowest scores first. Ties keep input order.
pub fn bottom_traits(traits: &[TraitScore], n: usize) -> Vec<TraitScore> {
    let mut sorted = traits.to_vec();
    sorted.sort_by(|a, b| a.score.cmp(&b.score));
    sorted.truncate(n);
    sorted
}

/// Scores every candidate career. Output is sorted by value descending;
/// equal values keep table order.
pub fn score_careers(
    traits: &[TraitScore],
    interests: &[String],
    tables: &ScoringTables,
) -> Vec<CareerMatch> {
    let mut totals: Vec<(&str, i32)> = tables
        .careers
        .iter()
        .map(|c| (c.as_str(), BASE_MATCH_SCORE))
        .collect();
    let mut applied: HashSet<(String, String)> = HashSet::new();

    let mut award = |career: &str, source: String, bonus: i32| {
        if !applied.insert((career.to_string(), source)) {
            return;
        }
        if let Some((_, total)) = totals.iter_mut().find(|(name, _)| *name == career) {
            *total += bonus;
        }
    };

    for t in traits.iter().filter(|t| t.score > APTITUDE_THRESHOLD) {
        let aptitude = t.name.to_lowercase();
        for career in tables.careers_for_aptitude(&aptitude) {
            award(career.as_str(), format!("aptitude:{aptitude}"), APTITUDE_BONUS);
        }
    }

    let interests: Vec<String> = interests.iter().map(|i| i.to_lowercase()).collect();
    for (keyword, careers) in &tables.interest_careers {
        if interests.iter().any(|i| interest_matches(i, keyword)) {
            for career in careers {
                award(career.as_str(), format!("interest:{keyword}"), INTEREST_BONUS);
            }
        }
    }

    let mut matches: Vec<CareerMatch> = totals
        .into_iter()
        .map(|(name, total)| CareerMatch {
            name: name.to_string(),
            value: total.clamp(MIN_MATCH_SCORE, MAX_MATCH_SCORE) as u8,
        })
        .collect();
    matches.sort_by(|a, b| b.value.cmp(&a.value));
    matches
}

/// Word match on a lowercase interest. A trailing plural `s` is allowed,
/// so "arts" matches `art` but "earth" and "smartphones" do not.
fn interest_matches(interest: &str, keyword: &str) -> bool {
    interest
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == keyword || word.strip_suffix('s') == Some(keyword))
}

/// First occurrence wins when a name appears twice.
fn score_of(traits: &[TraitScore], name: &str) -> Option<u8> {
    traits
        .iter()
        .find(|t| t.name.to_lowercase() == name)
        .map(|t| t.score)
}

pub fn classify_archetype(traits: &[TraitScore], tables: &ScoringTables) -> Archetype {
    tables
        .archetype_rules
        .iter()
        .find(|rule| {
            rule.thresholds
                .iter()
                .all(|(name, min)| score_of(traits, name).is_some_and(|s| s > *min))
        })
        .map(|rule| rule.archetype)
        .unwrap_or(Archetype::VersatileAdapter)
}

fn archetype_sentence(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::AnalyticalThinker => {
            "You are an analytical thinker who enjoys solving complex problems with logic and data."
        }
        Archetype::CreativeCommunicator => {
            "You are a creative communicator who expresses original ideas clearly and persuasively."
        }
        Archetype::PeopleOrientedCollaborator => {
            "You are a people-oriented collaborator who thrives when working with and helping others."
        }
        Archetype::HandsOnProblemSolver => {
            "You are a hands-on problem solver who learns best by building and doing."
        }
        Archetype::VersatileAdapter => {
            "You are a versatile adapter with a balanced profile that fits many different paths."
        }
    }
}

pub fn summarize(archetype: Archetype, top: &[TraitScore]) -> String {
    let names: Vec<&str> = top.iter().map(|t| t.name.as_str()).collect();
    match join_names(&names) {
        Some(joined) => format!(
            "{} Your strongest areas are {joined}.",
            archetype_sentence(archetype)
        ),
        None => archetype_sentence(archetype).to_string(),
    }
}

pub fn strengths(top: &[TraitScore], tables: &ScoringTables) -> Vec<String> {
    top.iter().map(|t| tables.strength_phrase(&t.name)).collect()
}

pub fn growth_areas(bottom: &[TraitScore], tables: &ScoringTables) -> Vec<String> {
    bottom.iter().map(|t| tables.growth_phrase(&t.name)).collect()
}

/// "a", "a and b", "a, b and c".
fn join_names(names: &[&str]) -> Option<String> {
    match names {
        [] => None,
        [only] => Some(only.to_string()),
        [init @ .., last] => Some(format!("{} and {last}", init.join(", "))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(name: &str, score: u8) -> TraitScore {
        TraitScore {
            name: name.to_string(),
            score,
            description: String::new(),
        }
    }

    fn names(traits: &[TraitScore]) -> Vec<&str> {
        traits.iter().map(|t| t.name.as_str()).collect()
    }

    fn value_of(matches: &[CareerMatch], career: &str) -> u8 {
        matches
            .iter()
            .find(|m| m.name == career)
            .map(|m| m.value)
            .unwrap()
    }

    fn sample_traits() -> Vec<TraitScore> {
        vec![
            t("analytical", 85),
            t("creative", 92),
            t("interpersonal", 78),
            t("practical", 65),
            t("verbal", 88),
            t("numerical", 72),
        ]
    }

    #[test]
    fn test_top_three_for_sample_profile() {
        let ranked = rank(&sample_traits(), &[], &ScoringTables::default());
        assert_eq!(names(&ranked.top), vec!["creative", "verbal", "analytical"]);
        assert_eq!(names(&ranked.bottom), vec!["practical", "numerical"]);
    }

    #[test]
    fn test_ranking_is_stable_for_ties() {
        let traits = vec![t("first", 50), t("high", 90), t("second", 50), t("low", 10)];
        assert_eq!(names(&top_traits(&traits, 3)), vec!["high", "first", "second"]);

        let traits = vec![t("high", 90), t("first", 20), t("second", 20)];
        assert_eq!(names(&bottom_traits(&traits, 2)), vec!["first", "second"]);
    }

    #[test]
    fn test_fewer_traits_than_slice_size() {
        let traits = vec![t("only", 40)];
        assert_eq!(top_traits(&traits, 3).len(), 1);
        assert_eq!(bottom_traits(&traits, 2).len(), 1);
    }

    #[test]
    fn test_sample_profile_bonuses() {
        let interests = vec!["technology".to_string(), "science".to_string()];
        let matches = score_careers(&sample_traits(), &interests, &ScoringTables::default());

        // analytical (+20) + numerical (+20) + technology (+10), clamped.
        assert_eq!(value_of(&matches, "Software Developer"), 100);
        // analytical (+20) + science (+10)
        assert_eq!(value_of(&matches, "Research Scientist"), 80);
        // interpersonal (+20) + science (+10); practical is below the threshold.
        assert_eq!(value_of(&matches, "Healthcare Professional"), 80);
        assert_eq!(matches[0].name, "Software Developer");
    }

    #[test]
    fn test_no_interests_no_aptitudes_gives_base_score() {
        let matches = score_careers(&[t("analytical", 70)], &[], &ScoringTables::default());
        assert!(matches.iter().all(|m| m.value == 50));
    }

    #[test]
    fn test_bonus_ignores_magnitude_above_threshold() {
        let tables = ScoringTables::default();
        let barely = score_careers(&[t("analytical", 71)], &[], &tables);
        let far = score_careers(&[t("analytical", 100)], &[], &tables);
        assert_eq!(
            value_of(&barely, "Research Scientist"),
            value_of(&far, "Research Scientist")
        );
        assert_eq!(value_of(&far, "Research Scientist"), 70);
    }

    #[test]
    fn test_bonus_applied_once_per_source() {
        let tables = ScoringTables::default();
        let traits = vec![t("analytical", 90), t("Analytical", 95)];
        let interests = vec![
            "technology".to_string(),
            "Technology clubs".to_string(),
            "science".to_string(),
        ];
        let matches = score_careers(&traits, &interests, &tables);
        assert_eq!(value_of(&matches, "Research Scientist"), 80);
        assert_eq!(value_of(&matches, "Data Analyst"), 80);
    }

    #[test]
    fn test_interest_keywords_match_whole_words() {
        let tables = ScoringTables::default();
        for interest in ["earth science", "start-ups", "heart health", "smartphones"] {
            let matches = score_careers(&[t("x", 10)], &[interest.to_string()], &tables);
            assert_eq!(value_of(&matches, "Graphic Designer"), 50, "{interest}");
        }

        let matches = score_careers(&[t("x", 10)], &["Arts & Crafts".to_string()], &tables);
        assert_eq!(value_of(&matches, "Graphic Designer"), 60);
        let matches = score_careers(&[t("x", 10)], &["earth science".to_string()], &tables);
        assert_eq!(value_of(&matches, "Research Scientist"), 60);
    }

    #[test]
    fn test_interest_matches() {
        assert!(interest_matches("art", "art"));
        assert!(interest_matches("visual arts", "art"));
        assert!(interest_matches("web-design", "design"));
        assert!(!interest_matches("smartphones", "art"));
        assert!(!interest_matches("designer", "design"));
    }

    #[test]
    fn test_career_values_stay_in_range() {
        let tables = ScoringTables::default();
        let traits: Vec<TraitScore> = ["analytical", "numerical", "creative", "verbal", "interpersonal", "practical"]
            .iter()
            .map(|n| t(n, 100))
            .collect();
        let interests: Vec<String> = ["technology", "science", "arts", "design", "helping others", "business", "writing", "health"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        for m in score_careers(&traits, &interests, &tables) {
            assert!((30..=100).contains(&m.value), "{} out of range", m.name);
        }
        for m in score_careers(&[], &[], &tables) {
            assert!((30..=100).contains(&m.value));
        }
    }

    #[test]
    fn test_matches_sorted_descending_with_table_order_on_ties() {
        let tables = ScoringTables::default();
        let matches = score_careers(&[], &[], &tables);
        let order: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        let table_order: Vec<&str> = tables.careers.iter().map(String::as_str).collect();
        assert_eq!(order, table_order);
    }

    #[test]
    fn test_archetype_first_matching_rule_wins() {
        let tables = ScoringTables::default();
        // Qualifies for both analytical-thinker and creative-communicator.
        assert_eq!(
            classify_archetype(&sample_traits(), &tables),
            Archetype::AnalyticalThinker
        );
        assert_eq!(
            classify_archetype(&[t("creative", 80), t("verbal", 90)], &tables),
            Archetype::CreativeCommunicator
        );
        assert_eq!(
            classify_archetype(&[t("Interpersonal", 90), t("verbal", 61)], &tables),
            Archetype::PeopleOrientedCollaborator
        );
        assert_eq!(
            classify_archetype(&[t("practical", 76)], &tables),
            Archetype::HandsOnProblemSolver
        );
    }

    #[test]
    fn test_archetype_thresholds_are_strict_and_missing_traits_fail() {
        let tables = ScoringTables::default();
        assert_eq!(
            classify_archetype(&[t("practical", 75)], &tables),
            Archetype::VersatileAdapter
        );
        assert_eq!(
            classify_archetype(&[t("analytical", 99)], &tables),
            Archetype::VersatileAdapter
        );
        assert_eq!(classify_archetype(&[], &tables), Archetype::VersatileAdapter);
    }

    #[test]
    fn test_summary_lists_top_traits() {
        let top = vec![t("creative", 92), t("verbal", 88), t("analytical", 85)];
        let summary = summarize(Archetype::AnalyticalThinker, &top);
        assert!(summary.starts_with("You are an analytical thinker"));
        assert!(summary.ends_with("Your strongest areas are creative, verbal and analytical."));
    }

    #[test]
    fn test_join_names() {
        assert_eq!(join_names(&[]), None);
        assert_eq!(join_names(&["a"]).unwrap(), "a");
        assert_eq!(join_names(&["a", "b"]).unwrap(), "a and b");
        assert_eq!(join_names(&["a", "b", "c"]).unwrap(), "a, b and c");
    }

    #[test]
    fn test_strengths_and_growth_fall_back_for_unknown_traits() {
        let tables = ScoringTables::default();
        let unknown = vec![t("Stamina", 40)];
        assert_eq!(
            growth_areas(&unknown, &tables),
            vec!["Develop your Stamina skills further".to_string()]
        );
        assert_eq!(
            strengths(&unknown, &tables),
            vec!["Your Stamina skills are a notable strength".to_string()]
        );
    }
}
