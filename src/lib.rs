//! # 24-Puzzle Solver Library
//!
//! This library solves the 5x5 sliding-tile puzzle optimally with A* search,
//! using one of two admissible heuristics.
//!
//! It is used by two binaries:
//! - `puzzle_solver`: Takes a comma-separated board and a heuristic choice,
//!   then prints an optimal move sequence and search statistics.
//! - `heuristic_evaluator`: Solves a batch of seeded scrambles with both
//!   heuristics and compares how many nodes each expands.
//!
//! ## Modules
//! - `engine`: The `Board` value type, `Direction`, and move generation.
//! - `heuristics`: Misplaced-tile (h1) and Manhattan-distance (h2) estimates.
//! - `solvability`: Inversion-parity check run before any search.
//! - `frontier`: The lazy-deletion priority queue and best-cost table.
//! - `solver`: The A* engine, its options and its result record.
//! - `error`: Error types shared by the modules above.
//! - `utils`: Parsing boards from comma-separated text.

pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod solvability;
pub mod solver;
pub mod utils;
