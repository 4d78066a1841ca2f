//! Optimizer Module - Pure domain services for team composition search.
//!
//! This module contains stateless functions that operate on member
//! profiles to score, enumerate, evaluate, and rank candidate teams.
//!
//! # Components
//!
//! - `CompatibilityModel` - Pairwise fit scoring (personality, role,
//!   skills, experience)
//! - `CompatibilityMatrix` - Dense symmetric pair table for one pool
//! - `TeamEnumerator` - Permitted sizes, lazy subset generation, and the
//!   evaluation budget
//! - `TeamEvaluator` - Composite metrics for one candidate subset
//! - `ObjectiveRanker` - Objective-specific ordering and top-K selection
//! - `InsightSynthesizer` - Natural-language observations about the winner
//! - `GreedyGrowth` - Bounded fallback once the budget is exhausted
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take
//! domain objects as input and return computed results. No ports or
//! adapters needed since there's no I/O or external dependencies.

mod compatibility;
mod enumerator;
mod evaluator;
mod greedy;
mod insights;
mod matrix;
mod ranker;

pub use compatibility::{
    CompatibilityModel, EXPERIENCE_WEIGHT, PERSONALITY_WEIGHT, ROLE_AFFINITY_DEFAULT,
    ROLE_WEIGHT, SKILL_WEIGHT,
};
pub use enumerator::{
    Combinations, EvaluationBudget, TeamEnumerator, MAX_TEAM_SIZE, MIN_TEAM_SIZE,
};
pub use evaluator::{TeamComposition, TeamEvaluator};
pub use greedy::GreedyGrowth;
pub use insights::{InsightSynthesizer, MAX_INSIGHTS};
pub use matrix::CompatibilityMatrix;
pub use ranker::{Objective, ObjectiveRanker, TOP_TEAM_COUNT};
