//! Team Evaluator - Composite metrics for one candidate subset.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::foundation::{Role, Score, TraitDimension};
use crate::domain::member::MemberProfile;

use super::CompatibilityMatrix;

/// Divisor normalizing experience spread into the unit interval.
const EXPERIENCE_SPREAD_SCALE: f64 = 5.0;
/// Experience spread beyond this flags a risk.
const EXPERIENCE_GAP_RISK_THRESHOLD: f64 = 8.0;
/// Mean availability below this flags a risk.
const LOW_AVAILABILITY_THRESHOLD: f64 = 0.8;
/// Most strengths or risks noted per team.
const MAX_NOTED: usize = 5;

/// An evaluated candidate team.
///
/// Created by [`TeamEvaluator::evaluate`] and consumed read-only by the
/// ranker and the insight synthesizer; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamComposition {
    /// Member identifiers in pool order.
    pub member_ids: Vec<String>,
    /// Count of each role present.
    pub role_distribution: BTreeMap<Role, usize>,
    /// Mean pairwise compatibility within the team.
    pub compatibility_score: Score,
    /// Non-redundancy of the combined skill set, with an abundance bonus.
    pub skill_coverage: Score,
    /// Mean of the available role/experience/skill/personality diversities.
    pub diversity_score: Score,
    /// Derived strengths, at most five.
    pub strengths: Vec<String>,
    /// Derived risks, at most five.
    pub risks: Vec<String>,
}

impl TeamComposition {
    /// Number of members on the team.
    pub fn team_size(&self) -> usize {
        self.member_ids.len()
    }

    /// Number of distinct roles present.
    pub fn unique_role_count(&self) -> usize {
        self.role_distribution.len()
    }
}

/// Computes composite metrics for candidate subsets.
pub struct TeamEvaluator;

impl TeamEvaluator {
    /// Evaluates one subset of pool positions against the shared matrix.
    pub fn evaluate(
        subset: &[usize],
        matrix: &CompatibilityMatrix,
        pool: &[MemberProfile],
    ) -> TeamComposition {
        let members: Vec<&MemberProfile> = subset.iter().map(|&i| &pool[i]).collect();

        let role_distribution = Self::role_distribution(&members);
        let compatibility = matrix.mean_pairwise(subset);
        let skill_coverage = Self::skill_coverage(&members);
        let diversity = Self::diversity_score(&members);
        let strengths = Self::derive_strengths(&members, &role_distribution);
        let risks = Self::derive_risks(&members, &role_distribution);

        TeamComposition {
            member_ids: members.iter().map(|m| m.id().to_string()).collect(),
            role_distribution,
            compatibility_score: Score::new(compatibility),
            skill_coverage: Score::new(skill_coverage),
            diversity_score: Score::new(diversity),
            strengths,
            risks,
        }
    }

    fn role_distribution(members: &[&MemberProfile]) -> BTreeMap<Role, usize> {
        let mut distribution = BTreeMap::new();
        for member in members {
            *distribution.entry(member.role()).or_insert(0) += 1;
        }
        distribution
    }

    /// Skill coverage: unique skills over total mentions, plus an abundance
    /// bonus of min(mentions / 10, 1) · 0.2, capped at 1.0.
    ///
    /// # Edge Cases
    /// - No skills anywhere on the team: 0.0
    fn skill_coverage(members: &[&MemberProfile]) -> f64 {
        let total_mentions: usize = members.iter().map(|m| m.skills().len()).sum();
        if total_mentions == 0 {
            return 0.0;
        }

        let unique = Self::unique_skill_count(members);
        let base = unique as f64 / total_mentions as f64;
        let abundance_bonus = (total_mentions as f64 / 10.0).min(1.0) * 0.2;
        (base + abundance_bonus).min(1.0)
    }

    /// Diversity: mean of the available sub-diversities. Sub-diversities
    /// without enough data are excluded from the mean, not counted as zero.
    fn diversity_score(members: &[&MemberProfile]) -> f64 {
        let mut components = Vec::with_capacity(4);

        let unique_roles: HashSet<Role> = members.iter().map(|m| m.role()).collect();
        components.push(unique_roles.len() as f64 / members.len() as f64);

        let reported: Vec<f64> = members.iter().filter_map(|m| m.experience_years()).collect();
        if reported.len() >= 2 {
            components.push((sample_stddev(&reported) / EXPERIENCE_SPREAD_SCALE).min(1.0));
        }

        let total_mentions: usize = members.iter().map(|m| m.skills().len()).sum();
        if total_mentions > 0 {
            components.push(Self::unique_skill_count(members) as f64 / total_mentions as f64);
        }

        let profiles: Vec<_> = members.iter().filter_map(|m| m.traits()).collect();
        if profiles.len() >= 2 {
            let mean_spread: f64 = TraitDimension::ALL
                .iter()
                .map(|&dim| {
                    let values: Vec<f64> = profiles.iter().map(|p| p.get(dim)).collect();
                    sample_stddev(&values)
                })
                .sum::<f64>()
                / TraitDimension::ALL.len() as f64;
            components.push((2.0 * mean_spread).min(1.0));
        }

        components.iter().sum::<f64>() / components.len() as f64
    }

    fn unique_skill_count(members: &[&MemberProfile]) -> usize {
        members
            .iter()
            .flat_map(|m| m.skills().iter().map(String::as_str))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Applies the strength rules in declaration order, keeping at most five.
    fn derive_strengths(
        members: &[&MemberProfile],
        roles: &BTreeMap<Role, usize>,
    ) -> Vec<String> {
        let mut strengths = Vec::new();
        let developer_count = roles.get(&Role::Developer).copied().unwrap_or(0);

        if developer_count >= 2 {
            strengths.push("Strong development capability".to_string());
        }
        if developer_count >= 1 && roles.contains_key(&Role::Qa) {
            strengths.push("Built-in quality feedback loop".to_string());
        }
        if roles.len() >= 4 {
            strengths.push("Broad role coverage".to_string());
        }

        let reported: Vec<f64> = members.iter().filter_map(|m| m.experience_years()).collect();
        if reported.len() >= 2 {
            let spread = sample_stddev(&reported);
            if (2.0..=5.0).contains(&spread) {
                strengths.push("Healthy mix of experience levels".to_string());
            }
        }

        if mean_availability(members) >= 0.9 {
            strengths.push("High team availability".to_string());
        }
        if Self::unique_skill_count(members) >= members.len() * 2 {
            strengths.push("Wide combined skill set".to_string());
        }

        strengths.truncate(MAX_NOTED);
        strengths
    }

    /// Applies the risk rules in declaration order, keeping at most five.
    fn derive_risks(members: &[&MemberProfile], roles: &BTreeMap<Role, usize>) -> Vec<String> {
        let mut risks = Vec::new();

        if !roles.contains_key(&Role::Developer) {
            risks.push("No developers on team".to_string());
        }
        if !roles.contains_key(&Role::ProductManager) {
            risks.push("No product manager to set priorities".to_string());
        }

        let reported: Vec<f64> = members.iter().filter_map(|m| m.experience_years()).collect();
        if reported.len() >= 2 && sample_stddev(&reported) > EXPERIENCE_GAP_RISK_THRESHOLD {
            risks.push("Large experience gap".to_string());
        }

        if mean_availability(members) < LOW_AVAILABILITY_THRESHOLD {
            risks.push("Limited team availability".to_string());
        }

        let total_mentions: usize = members.iter().map(|m| m.skills().len()).sum();
        if total_mentions > 0
            && (Self::unique_skill_count(members) as f64 / total_mentions as f64) < 0.5
        {
            risks.push("Heavily overlapping skill sets".to_string());
        }

        if roles.len() == 1 {
            risks.push("Single-role team narrows perspective".to_string());
        }

        risks.truncate(MAX_NOTED);
        risks
    }
}

fn mean_availability(members: &[&MemberProfile]) -> f64 {
    members.iter().map(|m| m.availability()).sum::<f64>() / members.len() as f64
}

/// Sample standard deviation; 0.0 for fewer than two values.
fn sample_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}
