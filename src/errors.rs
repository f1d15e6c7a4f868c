use thiserror::Error;

use crate::engine::Transformation;

/// Error produced when a puzzle state, tree node or search run fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("Malformed board: {0}")]
    MalformedBoard(String),

    #[error("Board '{0}' has no blank (0) tile")]
    MissingBlank(String),

    #[error("Move {transformation} is illegal for board '{board}'")]
    IllegalMove {
        transformation: Transformation,
        board: String,
    },

    #[error("Invalid node construction: {0}")]
    InvalidNodeConstruction(String),

    #[error("Cumulative cost overflows: {base} plus move cost {step}")]
    CostOverflow { base: u32, step: u32 },

    #[error("Exploration limit exhausted after {0} nodes")]
    ExplorationLimitExceeded(u64),
}

/// Result when a puzzle operation might fail.
pub type Result<T> = std::result::Result<T, PuzzleError>;
