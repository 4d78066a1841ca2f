//! Application layer - orchestration of the optimization pipeline.
//!
//! This layer coordinates the pure domain services into one synchronous
//! run per call and owns the concerns the domain stays free of: budget
//! enforcement, cancellation checkpoints, worker fan-out, and logging.

mod engine;

pub use engine::{
    CancelToken, OptimizationResult, OptimizerConfig, OptimizerEngine, ResultMetadata,
    DEFAULT_EVALUATION_BUDGET,
};
