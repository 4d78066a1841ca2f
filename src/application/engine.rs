//! OptimizerEngine - orchestration of the team composition pipeline.
//!
//! One synchronous, stateless computation per call: build the pairwise
//! matrix, enumerate and evaluate candidate subsets under a hard budget
//! with a cooperative cancellation checkpoint, fall back to greedy growth
//! if the budget trips, rank by the requested objective, and assemble the
//! result with insights and run metadata. The engine holds only constant
//! configuration; concurrent callers share nothing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::foundation::{OptimizeError, Score, Timestamp};
use crate::domain::member::MemberProfile;
use crate::domain::optimizer::{
    CompatibilityMatrix, EvaluationBudget, GreedyGrowth, InsightSynthesizer, Objective,
    ObjectiveRanker, TeamComposition, TeamEnumerator, TeamEvaluator, MIN_TEAM_SIZE,
    TOP_TEAM_COUNT,
};

/// Default cap on subsets evaluated across all team sizes.
pub const DEFAULT_EVALUATION_BUDGET: usize = 50_000;

/// Subsets drained from the enumerator between cancellation checks.
const EVALUATION_CHUNK: usize = 512;

/// Constant per-run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Hard cap on subsets evaluated before the greedy fallback engages.
    pub evaluation_budget: usize,
    /// Teams returned from the ranking pass.
    pub top_teams: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            evaluation_budget: DEFAULT_EVALUATION_BUDGET,
            top_teams: TOP_TEAM_COUNT,
        }
    }
}

/// Cooperative cancellation signal.
///
/// Cloned into whatever owns the caller's deadline; the engine checks it
/// between evaluation chunks and aborts with `OptimizeError::Cancelled`.
/// Aborting is always safe since a run mutates nothing outside local state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates an untripped token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trips the token; every clone observes the signal.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True once `cancel` has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Run metadata reported alongside the ranked teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// `"exhaustive"`, or `"exhaustive+greedy_fallback"` when the budget
    /// tripped and the result may be approximate.
    pub algorithm: String,
    /// Pool size for this run.
    pub total_candidates: usize,
    /// Candidate teams evaluated, including greedy-grown ones.
    pub teams_evaluated: usize,
    /// The resolved objective after tolerant parsing.
    pub objective: Objective,
    /// True when enumeration was cut short by the evaluation budget.
    pub budget_exhausted: bool,
    /// When the run completed.
    pub optimization_time: Timestamp,
}

/// The outcome of one optimization run. Ephemeral; never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// The top compositions under the resolved objective, best first.
    pub recommended_groups: Vec<TeamComposition>,
    /// Objective score of the best composition.
    pub overall_score: Score,
    /// Natural-language observations about the winner.
    pub insights: Vec<String>,
    /// Run metadata.
    pub metadata: ResultMetadata,
}

impl OptimizationResult {
    /// The best-ranked composition, if any.
    pub fn top_team(&self) -> Option<&TeamComposition> {
        self.recommended_groups.first()
    }

    /// Serializes the result for the transport layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Stateless optimization facade.
///
/// Construct once at process start or per call; either way it carries only
/// configuration, never per-request state, so sharing across threads is
/// safe.
#[derive(Debug, Clone, Default)]
pub struct OptimizerEngine {
    config: OptimizerConfig,
}

impl OptimizerEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Creates an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Runs the pipeline for a free-form objective string.
    ///
    /// Unrecognized objectives normalize to `maximize_performance`.
    pub fn optimize(
        &self,
        pool: &[MemberProfile],
        objective: &str,
    ) -> Result<OptimizationResult, OptimizeError> {
        self.optimize_with_cancel(pool, Objective::parse(objective), &CancelToken::new())
    }

    /// Runs the pipeline with an explicit objective and cancellation signal.
    ///
    /// # Errors
    /// - `InsufficientCandidates` when the pool has fewer than 3 members
    /// - `Cancelled` when the token trips at a checkpoint
    pub fn optimize_with_cancel(
        &self,
        pool: &[MemberProfile],
        objective: Objective,
        cancel: &CancelToken,
    ) -> Result<OptimizationResult, OptimizeError> {
        if pool.len() < MIN_TEAM_SIZE {
            return Err(OptimizeError::insufficient_candidates(
                pool.len(),
                MIN_TEAM_SIZE,
            ));
        }

        let matrix = CompatibilityMatrix::build(pool)?;
        let mut budget = EvaluationBudget::new(self.config.evaluation_budget);
        let mut candidates: Vec<TeamComposition> = Vec::new();
        let mut truncated = false;

        'sizes: for size in TeamEnumerator::team_sizes(pool.len()) {
            let mut subsets = TeamEnumerator::subsets(pool.len(), size).peekable();
            while subsets.peek().is_some() {
                if cancel.is_cancelled() {
                    return Err(OptimizeError::Cancelled);
                }
                if budget.is_exhausted() {
                    truncated = true;
                    break 'sizes;
                }

                let chunk: Vec<Vec<usize>> = subsets
                    .by_ref()
                    .take(EVALUATION_CHUNK.min(budget.remaining()))
                    .collect();
                budget.consume(chunk.len());

                candidates.extend(
                    chunk
                        .into_par_iter()
                        .map(|subset| TeamEvaluator::evaluate(&subset, &matrix, pool))
                        .collect::<Vec<_>>(),
                );
            }
        }

        if truncated {
            warn!(
                budget = budget.limit(),
                evaluated = budget.used(),
                "evaluation budget exhausted; switching to greedy growth"
            );
            candidates.extend(GreedyGrowth::run(&matrix, pool, objective));
        }

        let teams_evaluated = candidates.len();
        let ranked = ObjectiveRanker::rank(candidates, objective, self.config.top_teams);

        let overall_score = ranked
            .first()
            .map(|top| Score::new(ObjectiveRanker::score(top, objective)))
            .unwrap_or_default();
        let insights = ranked
            .first()
            .map(|top| InsightSynthesizer::summarize(top, pool.len()))
            .unwrap_or_default();

        debug!(
            objective = objective.label(),
            candidates = pool.len(),
            evaluated = teams_evaluated,
            returned = ranked.len(),
            "optimization run complete"
        );

        Ok(OptimizationResult {
            recommended_groups: ranked,
            overall_score,
            insights,
            metadata: ResultMetadata {
                algorithm: if truncated {
                    "exhaustive+greedy_fallback".to_string()
                } else {
                    "exhaustive".to_string()
                },
                total_candidates: pool.len(),
                teams_evaluated,
                objective,
                budget_exhausted: truncated,
                optimization_time: Timestamp::now(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Role;

    fn pool(count: usize) -> Vec<MemberProfile> {
        (0..count)
            .map(|i| {
                MemberProfile::builder(format!("m-{i}"))
                    .role(Role::KNOWN[i % Role::KNOWN.len()])
                    .skill(format!("skill-{}", i % 5))
                    .experience_years((i % 7) as f64)
                    .build()
            })
            .collect()
    }

    #[test]
    fn rejects_pools_below_minimum_size() {
        let engine = OptimizerEngine::with_defaults();
        let result = engine.optimize(&pool(2), "maximize_performance");
        assert_eq!(
            result.unwrap_err(),
            OptimizeError::InsufficientCandidates { actual: 2, required: 3 }
        );
    }

    #[test]
    fn evaluates_all_subsets_for_small_pools() {
        let engine = OptimizerEngine::with_defaults();
        let result = engine.optimize(&pool(5), "maximize_performance").unwrap();
        // C(5,3) + C(5,4) + C(5,5) = 10 + 5 + 1
        assert_eq!(result.metadata.teams_evaluated, 16);
        assert!(!result.metadata.budget_exhausted);
        assert_eq!(result.metadata.algorithm, "exhaustive");
        assert_eq!(result.recommended_groups.len(), 5);
    }

    #[test]
    fn unknown_objective_normalizes_to_performance() {
        let engine = OptimizerEngine::with_defaults();
        let result = engine.optimize(&pool(4), "synergize_all_the_things").unwrap();
        assert_eq!(result.metadata.objective, Objective::MaximizePerformance);
    }

    #[test]
    fn budget_exhaustion_engages_greedy_fallback() {
        let engine = OptimizerEngine::new(OptimizerConfig {
            evaluation_budget: 10,
            top_teams: 5,
        });
        let result = engine.optimize(&pool(12), "maximize_performance").unwrap();
        assert!(result.metadata.budget_exhausted);
        assert_eq!(result.metadata.algorithm, "exhaustive+greedy_fallback");
        assert!(!result.recommended_groups.is_empty());
    }

    #[test]
    fn pre_tripped_token_cancels_the_run() {
        let engine = OptimizerEngine::with_defaults();
        let cancel = CancelToken::new();
        cancel.cancel();
        let result = engine.optimize_with_cancel(
            &pool(6),
            Objective::MaximizePerformance,
            &cancel,
        );
        assert_eq!(result.unwrap_err(), OptimizeError::Cancelled);
    }

    #[test]
    fn overall_score_matches_top_group() {
        let engine = OptimizerEngine::with_defaults();
        let result = engine.optimize(&pool(6), "minimize_conflicts").unwrap();
        let top = result.top_team().unwrap();
        assert_eq!(
            result.overall_score.value(),
            top.compatibility_score.value()
        );
    }

    #[test]
    fn result_serializes_to_json() {
        let engine = OptimizerEngine::with_defaults();
        let result = engine.optimize(&pool(4), "balance_diversity").unwrap();
        let json = result.to_json().unwrap();
        assert!(json.contains("\"recommended_groups\""));
        assert!(json.contains("\"balance_diversity\""));
    }

    #[test]
    fn config_default_matches_documented_budget() {
        let config = OptimizerConfig::default();
        assert_eq!(config.evaluation_budget, DEFAULT_EVALUATION_BUDGET);
        assert_eq!(config.top_teams, TOP_TEAM_COUNT);
    }
}
