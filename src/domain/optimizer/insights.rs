//! Insight Synthesizer - natural-language observations about the top team.
//!
//! Purely presentational; fixed thresholds, no side effects.

use super::TeamComposition;

/// Most observations emitted per run.
pub const MAX_INSIGHTS: usize = 4;

const EXCELLENT_COMPATIBILITY: f64 = 0.8;
const MODEST_COMPATIBILITY: f64 = 0.5;
const STRONG_COVERAGE: f64 = 0.8;
const HIGH_DIVERSITY: f64 = 0.7;
const SMALL_TEAM: usize = 3;
const LARGE_TEAM: usize = 7;
const SMALL_POOL: usize = 6;

/// Derives insight strings from the top-ranked composition.
pub struct InsightSynthesizer;

impl InsightSynthesizer {
    /// Emits at most four observations about the winning team.
    pub fn summarize(top: &TeamComposition, total_candidates: usize) -> Vec<String> {
        let mut insights = Vec::new();

        let compatibility = top.compatibility_score.value();
        if compatibility > EXCELLENT_COMPATIBILITY {
            insights.push("Excellent team compatibility predicted".to_string());
        } else if compatibility < MODEST_COMPATIBILITY {
            insights.push(
                "Compatibility is modest; plan for explicit conflict resolution".to_string(),
            );
        }

        if top.skill_coverage.value() > STRONG_COVERAGE {
            insights.push("Combined skills cover the work with little redundancy".to_string());
        }

        if top.diversity_score.value() > HIGH_DIVERSITY {
            insights.push("Diverse composition supports creative problem solving".to_string());
        }

        if top.team_size() <= SMALL_TEAM {
            insights.push("Small team size, good for rapid decision making".to_string());
        } else if top.team_size() >= LARGE_TEAM {
            insights.push("Large team; agree on coordination practices early".to_string());
        }

        if total_candidates < SMALL_POOL {
            insights.push("Few candidates available; rankings may be close".to_string());
        }

        insights.truncate(MAX_INSIGHTS);
        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Score;
    use std::collections::BTreeMap;

    fn team(size: usize, compatibility: f64, coverage: f64, diversity: f64) -> TeamComposition {
        TeamComposition {
            member_ids: (0..size).map(|i| format!("m-{i}")).collect(),
            role_distribution: BTreeMap::new(),
            compatibility_score: Score::new(compatibility),
            skill_coverage: Score::new(coverage),
            diversity_score: Score::new(diversity),
            strengths: Vec::new(),
            risks: Vec::new(),
        }
    }

    #[test]
    fn excellent_compatibility_is_noted() {
        let insights = InsightSynthesizer::summarize(&team(4, 0.85, 0.5, 0.5), 10);
        assert_eq!(insights[0], "Excellent team compatibility predicted");
    }

    #[test]
    fn modest_compatibility_is_noted() {
        let insights = InsightSynthesizer::summarize(&team(4, 0.4, 0.5, 0.5), 10);
        assert!(insights[0].starts_with("Compatibility is modest"));
    }

    #[test]
    fn middling_compatibility_is_silent() {
        let insights = InsightSynthesizer::summarize(&team(4, 0.6, 0.5, 0.5), 10);
        assert!(insights.iter().all(|i| !i.contains("compatibility")));
    }

    #[test]
    fn small_team_observation_fires_at_three() {
        let insights = InsightSynthesizer::summarize(&team(3, 0.6, 0.5, 0.5), 10);
        assert!(insights
            .contains(&"Small team size, good for rapid decision making".to_string()));
    }

    #[test]
    fn large_team_observation_fires_at_seven() {
        let insights = InsightSynthesizer::summarize(&team(7, 0.6, 0.5, 0.5), 10);
        assert!(insights
            .contains(&"Large team; agree on coordination practices early".to_string()));
    }

    #[test]
    fn small_pool_is_noted() {
        let insights = InsightSynthesizer::summarize(&team(4, 0.6, 0.5, 0.5), 4);
        assert!(insights
            .contains(&"Few candidates available; rankings may be close".to_string()));
    }

    #[test]
    fn observations_are_capped_at_four() {
        // trips compatibility, coverage, diversity, small team, and small pool
        let insights = InsightSynthesizer::summarize(&team(3, 0.9, 0.9, 0.9), 3);
        assert_eq!(insights.len(), MAX_INSIGHTS);
    }
}
