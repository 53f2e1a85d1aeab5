//! Inversion-parity solvability check.
//!
//! Read the numbered tiles in row-major order, skipping the blank, and count
//! the pairs that appear in the wrong relative order. Sliding the blank left or
//! right leaves that order untouched. Sliding it up or down carries one tile
//! past the `BOARD_WIDTH - 1 = 4` tiles between its old and new cell, which
//! flips exactly 4 pairs. Every legal move therefore changes the inversion
//! count by an even amount. The goal has no inversions, so on this odd-width
//! board a position is solvable exactly when its inversion count is even. The
//! blank's row only enters the rule on even-width boards, where a vertical
//! move flips an odd number of pairs.
use crate::engine::{Board, BLANK};

/// Counts pairs of numbered tiles whose row-major order disagrees with the goal.
pub fn inversion_count(board: &Board) -> usize {
    let tiles: Vec<u8> = board
        .tiles()
        .iter()
        .copied()
        .filter(|&tile| tile != BLANK)
        .collect();

    tiles
        .iter()
        .enumerate()
        .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&later| later < tile).count())
        .sum()
}

/// Returns `true` if the goal can be reached from `board`.
///
/// # Examples
/// ```
/// use puzzle24_solver::engine::Board;
/// use puzzle24_solver::solvability::is_solvable;
///
/// assert!(is_solvable(&Board::goal()));
///
/// let mut swapped = Board::goal().tiles().to_vec();
/// swapped.swap(0, 1);
/// assert!(!is_solvable(&Board::from_tiles(&swapped).unwrap()));
/// ```
pub fn is_solvable(board: &Board) -> bool {
    inversion_count(board) % 2 == 0
}
