//! # Tile Search Library
//!
//! Graph search over the 3x3 sliding-tile puzzle (the 8-puzzle). Moving the blank
//! costs the value of the tile it displaces, so searches can be compared by path
//! length, path cost, nodes explored and peak frontier size.
//!
//! It is used by two binaries:
//! - `puzzle_solver`: Solves one board with a chosen strategy and evaluation policy
//!   and prints the path and statistics.
//! - `strategy_evaluator`: Runs every strategy/policy pairing over reference boards
//!   and seeded scrambles and reports the statistics side by side.
//!
//! ## Modules
//! - `engine`: The board (`State`) and the blank's moves (`Transformation`).
//! - `heuristics`: `EvaluationPolicy` and the misplaced-tile and Manhattan distances.
//! - `node`: Search-tree nodes and the `SearchTree` arena that owns them.
//! - `frontier`: FIFO, LIFO and lowest-cost-first frontiers.
//! - `solver`: The `Strategy` algorithms.
//! - `stats`: `StatsCollector` and its `SearchStatistics` snapshot.
//! - `session`: `SearchSession`, one configured search and its results.
//! - `errors`: `PuzzleError` and the crate `Result` alias.
//! - `utils`: Board text parsing and formatting.

pub mod engine;
pub mod errors;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod session;
pub mod solver;
pub mod stats;
pub mod utils;

pub use errors::{PuzzleError, Result};
