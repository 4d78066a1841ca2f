//! Objective Ranker - objective-specific ordering of evaluated teams.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::TeamComposition;

/// Teams returned from a ranking pass.
pub const TOP_TEAM_COUNT: usize = 5;

/// The caller-selected optimization criterion.
///
/// Unrecognized objective strings are not an error; they normalize to
/// `MaximizePerformance` by explicit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    MaximizePerformance,
    MinimizeConflicts,
    BalanceDiversity,
    OptimizeCollaboration,
}

impl Objective {
    /// Tolerant parse: unrecognized values resolve to `MaximizePerformance`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "minimize_conflicts" => Objective::MinimizeConflicts,
            "balance_diversity" => Objective::BalanceDiversity,
            "optimize_collaboration" => Objective::OptimizeCollaboration,
            _ => Objective::MaximizePerformance,
        }
    }

    /// Returns the canonical label for this objective.
    pub fn label(&self) -> &'static str {
        match self {
            Objective::MaximizePerformance => "maximize_performance",
            Objective::MinimizeConflicts => "minimize_conflicts",
            Objective::BalanceDiversity => "balance_diversity",
            Objective::OptimizeCollaboration => "optimize_collaboration",
        }
    }
}

/// Orders evaluated teams by the requested objective.
pub struct ObjectiveRanker;

impl ObjectiveRanker {
    /// The sort key for one team under an objective.
    ///
    /// - `MaximizePerformance`: 0.4·compatibility + 0.4·coverage + 0.2·diversity
    /// - `MinimizeConflicts`: compatibility alone
    /// - `BalanceDiversity`: diversity alone
    /// - `OptimizeCollaboration`: 0.6·compatibility + 0.4·diversity
    pub fn score(team: &TeamComposition, objective: Objective) -> f64 {
        let compatibility = team.compatibility_score.value();
        let coverage = team.skill_coverage.value();
        let diversity = team.diversity_score.value();

        match objective {
            Objective::MaximizePerformance => {
                0.4 * compatibility + 0.4 * coverage + 0.2 * diversity
            }
            Objective::MinimizeConflicts => compatibility,
            Objective::BalanceDiversity => diversity,
            Objective::OptimizeCollaboration => 0.6 * compatibility + 0.4 * diversity,
        }
    }

    /// Sorts candidates descending by objective score and keeps the top
    /// `top` entries.
    ///
    /// The sort is stable, so equal-scored teams keep their insertion order
    /// (ascending team size, lexicographic subsets within a size). The
    /// collaboration objective additionally nudges exact-score ties toward
    /// the team with more distinct roles; it is never a primary key.
    pub fn rank(
        mut candidates: Vec<TeamComposition>,
        objective: Objective,
        top: usize,
    ) -> Vec<TeamComposition> {
        candidates.sort_by(|a, b| {
            let primary = Self::score(b, objective).total_cmp(&Self::score(a, objective));
            if primary != Ordering::Equal || objective != Objective::OptimizeCollaboration {
                return primary;
            }
            b.unique_role_count().cmp(&a.unique_role_count())
        });
        candidates.truncate(top);
        candidates
    }
}
