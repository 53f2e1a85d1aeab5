//! Board representation and move generation for the 24-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Direction`: the four ways the blank can slide.
//! - `Board`: an immutable 5x5 tile arrangement with blank tracking, legal-move
//!   generation and path replay.
use crate::error::BoardShapeError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// Width (and height) of the square board.
pub const BOARD_WIDTH: usize = 5;

/// Number of cells on the board, including the blank.
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// The label used for the blank cell.
pub const BLANK: u8 = 0;

/// Converts a linear row-major index into its `(row, col)` position.
pub fn position(index: usize) -> (usize, usize) {
    (index / BOARD_WIDTH, index % BOARD_WIDTH)
}

/// Returns the linear index at which `tile` sits on the goal board.
///
/// Tiles `1..=24` occupy indices `0..=23`; the blank belongs in the last cell.
pub fn goal_index(tile: u8) -> usize {
    if tile == BLANK {
        BOARD_CELLS - 1
    } else {
        tile as usize - 1
    }
}

/// A direction in which the blank slides.
///
/// `Up` swaps the blank with the tile above it, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order successors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the direction that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use puzzle24_solver::engine::Direction;
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Single-letter form, as used in compact move listings.
    pub fn to_char(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        f.write_str(name)
    }
}

/// A 5x5 arrangement of tiles, stored row-major.
///
/// A `Board` always holds each label `0..=24` exactly once. It is never
/// mutated after construction: moves produce new boards. Equality and hashing
/// cover the full tile array, so boards can key the search's best-cost table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; BOARD_CELLS],
    blank: u8,
}

impl Board {
    /// Returns the solved board: `1..=24` in row-major order with the blank last.
    ///
    /// # Examples
    /// ```
    /// use puzzle24_solver::engine::Board;
    /// let goal = Board::goal();
    /// assert_eq!(goal.tile_at(0, 0), 1);
    /// assert_eq!(goal.blank_index(), 24);
    /// assert!(goal.is_goal());
    /// ```
    pub fn goal() -> Self {
        let mut tiles = [BLANK; BOARD_CELLS];
        for (index, tile) in tiles.iter_mut().enumerate().take(BOARD_CELLS - 1) {
            *tile = index as u8 + 1;
        }
        Board {
            tiles,
            blank: (BOARD_CELLS - 1) as u8,
        }
    }

    /// Builds a board from a row-major slice of tile labels.
    ///
    /// # Errors
    /// Returns a [`BoardShapeError`] when the slice does not hold exactly 25
    /// labels, a label is above 24, or a label appears twice.
    pub fn from_tiles(labels: &[u8]) -> Result<Self, BoardShapeError> {
        if labels.len() != BOARD_CELLS {
            return Err(BoardShapeError::WrongLength {
                found: labels.len(),
            });
        }

        let mut seen = [false; BOARD_CELLS];
        let mut tiles = [BLANK; BOARD_CELLS];
        let mut blank = 0;
        for (index, &label) in labels.iter().enumerate() {
            let slot = seen
                .get_mut(label as usize)
                .ok_or(BoardShapeError::TileOutOfRange { tile: label as u32 })?;
            if *slot {
                return Err(BoardShapeError::DuplicateTile { tile: label });
            }
            *slot = true;
            tiles[index] = label;
            if label == BLANK {
                blank = index as u8;
            }
        }

        Ok(Board { tiles, blank })
    }

    /// Produces a solvable board by walking the blank `moves` random steps from the goal.
    ///
    /// The walk never immediately undoes its previous step. The same `seed`
    /// always yields the same board.
    pub fn scrambled(seed: u64, moves: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal();
        let mut last: Option<Direction> = None;

        for _ in 0..moves {
            let candidates: Vec<(Direction, Board)> = board
                .successors()
                .into_iter()
                .filter(|(direction, _)| last.map_or(true, |l| *direction != l.opposite()))
                .collect();
            // Every cell has at least two neighbours, so one candidate survives the filter.
            if let Some(&(direction, next)) = candidates.choose(&mut rng) {
                board = next;
                last = Some(direction);
            }
        }
        board
    }

    /// Returns the tiles in row-major order.
    pub fn tiles(&self) -> &[u8; BOARD_CELLS] {
        &self.tiles
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside the board.
    pub fn tile_at(&self, r: usize, c: usize) -> u8 {
        self.tiles[r * BOARD_WIDTH + c]
    }

    /// Linear index of the blank.
    pub fn blank_index(&self) -> usize {
        self.blank as usize
    }

    /// `(row, col)` of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        position(self.blank_index())
    }

    pub fn is_goal(&self) -> bool {
        *self == Board::goal()
    }

    /// Slides the blank one cell in `direction`.
    ///
    /// Returns `None` if that would move the blank off the board.
    pub fn apply_move(&self, direction: Direction) -> Option<Board> {
        let (r, c) = self.blank_position();
        let target = match direction {
            Direction::Up if r > 0 => self.blank_index() - BOARD_WIDTH,
            Direction::Down if r + 1 < BOARD_WIDTH => self.blank_index() + BOARD_WIDTH,
            Direction::Left if c > 0 => self.blank_index() - 1,
            Direction::Right if c + 1 < BOARD_WIDTH => self.blank_index() + 1,
            _ => return None,
        };

        let mut tiles = self.tiles;
        tiles.swap(self.blank_index(), target);
        Some(Board {
            tiles,
            blank: target as u8,
        })
    }

    /// Lists every board one legal move away, paired with the move that reaches it.
    ///
    /// A corner blank yields 2 successors, an edge blank 3, and an interior blank 4.
    pub fn successors(&self) -> Vec<(Direction, Board)> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.apply_move(direction).map(|next| (direction, next)))
            .collect()
    }

    /// Replays `moves` from this board, returning every board visited after the start.
    ///
    /// Returns `None` if any move is illegal at the point it is applied.
    pub fn apply_moves(&self, moves: &[Direction]) -> Option<Vec<Board>> {
        let mut boards = Vec::with_capacity(moves.len());
        let mut current = *self;
        for &direction in moves {
            current = current.apply_move(direction)?;
            boards.push(current);
        }
        Some(boards)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.tiles.chunks(BOARD_WIDTH).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, "{:>2}", ".")?;
                } else {
                    write!(f, "{:>2}", tile)?;
                }
            }
        }
        Ok(())
    }
}
