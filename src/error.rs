use crate::solver::{SearchLimit, SearchStats};
use thiserror::Error;

/// Reasons a sequence of labels is not a valid 5x5 board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardShapeError {
    #[error("expected exactly 25 tiles, found {found}")]
    WrongLength { found: usize },
    #[error("tile {tile} is out of range; tiles must be between 0 and 24")]
    TileOutOfRange { tile: u32 },
    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },
    #[error("'{token}' is not a tile number")]
    NotANumber { token: String },
}

/// Everything that can stop a board from being solved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("invalid board: {0}")]
    InvalidBoardShape(#[from] BoardShapeError),
    #[error("puzzle is not solvable: {inversions} inversions (odd parity)")]
    Unsolvable { inversions: usize },
    /// The frontier ran dry on a board that passed the parity check. This can
    /// only happen through a bug in move generation, the heuristic or the
    /// solvability check.
    #[error(
        "search exhausted the frontier after expanding {} nodes without reaching the goal",
        .stats.nodes_expanded
    )]
    SearchExhausted { stats: SearchStats },
    #[error(
        "search stopped after reaching {limit} ({} nodes expanded)",
        .stats.nodes_expanded
    )]
    LimitReached {
        limit: SearchLimit,
        stats: SearchStats,
    },
}

impl PuzzleError {
    /// Search statistics gathered before the failure, if the search started at all.
    pub fn stats(&self) -> Option<&SearchStats> {
        match self {
            PuzzleError::SearchExhausted { stats } | PuzzleError::LimitReached { stats, .. } => {
                Some(stats)
            }
            PuzzleError::InvalidBoardShape(_) | PuzzleError::Unsolvable { .. } => None,
        }
    }
}
