//! Admissible distance estimates used to order the A* frontier.
//!
//! Both estimates are consistent: a single blank move changes either of them
//! by at most one, which is also the cost of the move.
use crate::engine::{goal_index, position, Board, BLANK};
use std::fmt;
use std::str::FromStr;

/// Which heuristic the solver binds for a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// h1: number of tiles not on their goal cell.
    MisplacedTiles,
    /// h2: sum of every tile's Manhattan distance to its goal cell.
    #[default]
    Manhattan,
}

impl Heuristic {
    /// Estimates the number of moves left to reach the goal from `board`.
    pub fn evaluate(self, board: &Board) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(board),
            Heuristic::Manhattan => manhattan_distance(board),
        }
    }

    /// Short identifier accepted on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Heuristic::MisplacedTiles => "h1",
            Heuristic::Manhattan => "h2",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h1" | "1" | "misplaced" => Ok(Heuristic::MisplacedTiles),
            "h2" | "2" | "manhattan" => Ok(Heuristic::Manhattan),
            other => Err(format!(
                "unknown heuristic '{}', expected h1 (misplaced) or h2 (manhattan)",
                other
            )),
        }
    }
}

/// Counts the numbered tiles that are not on their goal cell.
///
/// The blank is never counted, so the result is 0 exactly on the goal board.
///
/// # Examples
/// ```
/// use puzzle24_solver::engine::{Board, Direction};
/// use puzzle24_solver::heuristics::misplaced_tiles;
///
/// let goal = Board::goal();
/// assert_eq!(misplaced_tiles(&goal), 0);
/// let one_move = goal.apply_move(Direction::Left).unwrap();
/// assert_eq!(misplaced_tiles(&one_move), 1);
/// ```
pub fn misplaced_tiles(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(index, &tile)| tile != BLANK && goal_index(tile) != index)
        .count() as u32
}

/// Sums, over all numbered tiles, the row distance plus the column distance
/// between the tile's cell and its goal cell.
pub fn manhattan_distance(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(index, &tile)| {
            let (r, c) = position(index);
            let (goal_r, goal_c) = position(goal_index(tile));
            (r.abs_diff(goal_r) + c.abs_diff(goal_c)) as u32
        })
        .sum()
}
