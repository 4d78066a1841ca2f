//! Greedy Growth - bounded fallback strategy for large pools.
//!
//! Once the evaluation budget is exhausted, exhaustive enumeration stops
//! and this strategy takes over: seed with the most compatible pair in the
//! matrix, then repeatedly add the member that maximizes the objective
//! score of the grown team, emitting one evaluated composition per
//! permitted size. The result may be approximate; the engine reports the
//! switch in run metadata.

use crate::domain::member::MemberProfile;

use super::{
    CompatibilityMatrix, Objective, ObjectiveRanker, TeamComposition, TeamEvaluator,
    MAX_TEAM_SIZE, MIN_TEAM_SIZE,
};

/// The budget-exhaustion fallback strategy.
pub struct GreedyGrowth;

impl GreedyGrowth {
    /// Grows one candidate team per permitted size.
    ///
    /// # Edge Cases
    /// - Pools smaller than 3: returns no compositions (the engine rejects
    ///   such pools before any strategy runs)
    pub fn run(
        matrix: &CompatibilityMatrix,
        pool: &[MemberProfile],
        objective: Objective,
    ) -> Vec<TeamComposition> {
        let n = pool.len();
        if n < MIN_TEAM_SIZE {
            return Vec::new();
        }

        let mut team = Self::best_pair(matrix, n);
        let mut grown = Vec::new();
        let max_size = MAX_TEAM_SIZE.min(n);

        while team.len() < max_size {
            let mut best: Option<(Vec<usize>, TeamComposition, f64)> = None;

            for candidate in (0..n).filter(|i| !team.contains(i)) {
                let mut trial = team.clone();
                trial.push(candidate);
                trial.sort_unstable();

                let composition = TeamEvaluator::evaluate(&trial, matrix, pool);
                let score = ObjectiveRanker::score(&composition, objective);
                let improves = match &best {
                    Some((_, _, best_score)) => score > *best_score,
                    None => true,
                };
                if improves {
                    best = Some((trial, composition, score));
                }
            }

            match best {
                Some((trial, composition, _)) => {
                    team = trial;
                    if team.len() >= MIN_TEAM_SIZE {
                        grown.push(composition);
                    }
                }
                None => break,
            }
        }

        grown
    }

    /// The pool pair with the highest matrix entry.
    fn best_pair(matrix: &CompatibilityMatrix, n: usize) -> Vec<usize> {
        let mut best = (0, 1);
        let mut best_score = f64::NEG_INFINITY;
        for i in 0..n {
            for j in (i + 1)..n {
                let score = matrix.get(i, j);
                if score > best_score {
                    best_score = score;
                    best = (i, j);
                }
            }
        }
        vec![best.0, best.1]
    }
}
