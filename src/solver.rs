use crate::engine::{Board, Direction};
use crate::error::PuzzleError;
use crate::frontier::{BestCostTable, Frontier};
use crate::heuristics::Heuristic;
use crate::solvability::{inversion_count, is_solvable};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Tuning knobs for a single search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub heuristic: Heuristic,
    /// Skip the successor that would undo the move leading to the current node.
    /// This never changes the result; the best-cost table rejects that board anyway.
    pub suppress_reversals: bool,
    /// Stop after this many expansions.
    pub max_expansions: Option<u64>,
    /// Stop once this much wall-clock time has passed.
    pub time_limit: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            heuristic: Heuristic::default(),
            suppress_reversals: true,
            max_expansions: None,
            time_limit: None,
        }
    }
}

impl SearchOptions {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn with_suppress_reversals(mut self, suppress_reversals: bool) -> Self {
        self.suppress_reversals = suppress_reversals;
        self
    }
}

/// A bound from [`SearchOptions`] that ended a search early.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchLimit {
    MaxExpansions(u64),
    TimeLimit(Duration),
}

impl fmt::Display for SearchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchLimit::MaxExpansions(n) => write!(f, "the expansion limit of {}", n),
            SearchLimit::TimeLimit(d) => write!(f, "the time limit of {:.3}s", d.as_secs_f64()),
        }
    }
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Live (non-stale) entries popped from the frontier.
    pub nodes_expanded: u64,
    /// Successors pushed onto the frontier. The start node is not counted.
    pub nodes_generated: u64,
    /// Largest frontier size observed, stale entries included.
    pub max_frontier: usize,
    pub elapsed: Duration,
}

/// Represents an optimal solution found by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Blank moves leading from the start board to the goal.
    pub moves: Vec<Direction>,
    /// Path cost; every move costs one.
    pub cost: u32,
    pub stats: SearchStats,
}

impl Solution {
    /// Replays the moves from `start`, returning each board after each move.
    ///
    /// Returns `None` if `start` is not the board this solution was found for.
    pub fn boards(&self, start: &Board) -> Option<Vec<Board>> {
        start.apply_moves(&self.moves)
    }
}

#[derive(Debug)]
struct SearchNode {
    board: Board,
    g: u32,
    parent: Option<usize>,
    via: Option<Direction>,
}

/// A* search over a single start board.
///
/// Constructing the engine checks solvability and seeds the frontier with the
/// start node; [`SearchEngine::run`] then drives the search to completion.
/// Nodes live in a flat arena and refer to their parents by index.
#[derive(Debug)]
pub struct SearchEngine {
    options: SearchOptions,
    nodes: Vec<SearchNode>,
    frontier: Frontier,
    best: BestCostTable,
    stats: SearchStats,
}

impl SearchEngine {
    /// Prepares a search from `start`.
    ///
    /// # Errors
    /// Returns [`PuzzleError::Unsolvable`] if `start` has odd inversion parity.
    pub fn new(start: Board, options: SearchOptions) -> Result<Self, PuzzleError> {
        if !is_solvable(&start) {
            return Err(PuzzleError::Unsolvable {
                inversions: inversion_count(&start),
            });
        }

        let h = options.heuristic.evaluate(&start);
        let mut frontier = Frontier::new();
        let mut best = BestCostTable::new();
        best.improve(start, 0);
        frontier.push(h, 0, 0);

        debug!(heuristic = %options.heuristic, initial_h = h, "search ready");

        Ok(SearchEngine {
            options,
            nodes: vec![SearchNode {
                board: start,
                g: 0,
                parent: None,
                via: None,
            }],
            frontier,
            best,
            stats: SearchStats::default(),
        })
    }

    /// Runs the search until the goal is reached, the frontier empties, or a
    /// configured limit is hit.
    pub fn run(mut self) -> Result<Solution, PuzzleError> {
        let started = Instant::now();

        while let Some(entry) = self.frontier.pop() {
            let (board, g, via) = {
                let node = &self.nodes[entry.node];
                (node.board, node.g, node.via)
            };

            if self.best.is_stale(&board, g) {
                trace!(node = entry.node, g, "skipping stale frontier entry");
                continue;
            }

            if let Some(limit) = self.limit_reached(started) {
                let stats = self.finish_stats(started);
                warn!(%limit, expanded = stats.nodes_expanded, "search stopped early");
                return Err(PuzzleError::LimitReached { limit, stats });
            }

            self.stats.nodes_expanded += 1;

            if board.is_goal() {
                let stats = self.finish_stats(started);
                let moves = self.reconstruct_moves(entry.node);
                debug!(
                    cost = g,
                    expanded = stats.nodes_expanded,
                    generated = stats.nodes_generated,
                    "goal reached"
                );
                return Ok(Solution {
                    moves,
                    cost: g,
                    stats,
                });
            }

            let reverse = via.map(Direction::opposite);
            for (direction, next) in board.successors() {
                if self.options.suppress_reversals && Some(direction) == reverse {
                    continue;
                }

                let next_g = g + 1;
                if !self.best.improve(next, next_g) {
                    continue;
                }

                let index = self.nodes.len();
                self.nodes.push(SearchNode {
                    board: next,
                    g: next_g,
                    parent: Some(entry.node),
                    via: Some(direction),
                });
                let f = next_g + self.options.heuristic.evaluate(&next);
                self.frontier.push(f, next_g, index);
                self.stats.nodes_generated += 1;
            }
        }

        let stats = self.finish_stats(started);
        warn!(
            expanded = stats.nodes_expanded,
            seen = self.best.len(),
            "frontier exhausted on a solvable board"
        );
        Err(PuzzleError::SearchExhausted { stats })
    }

    fn limit_reached(&self, started: Instant) -> Option<SearchLimit> {
        if let Some(max) = self.options.max_expansions {
            if self.stats.nodes_expanded >= max {
                return Some(SearchLimit::MaxExpansions(max));
            }
        }
        if let Some(time_limit) = self.options.time_limit {
            if started.elapsed() >= time_limit {
                return Some(SearchLimit::TimeLimit(time_limit));
            }
        }
        None
    }

    fn finish_stats(&self, started: Instant) -> SearchStats {
        SearchStats {
            max_frontier: self.frontier.peak_len(),
            elapsed: started.elapsed(),
            ..self.stats
        }
    }

    fn reconstruct_moves(&self, goal: usize) -> Vec<Direction> {
        let mut moves = Vec::with_capacity(self.nodes[goal].g as usize);
        let mut cursor = Some(goal);
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            if let Some(direction) = node.via {
                moves.push(direction);
            }
            cursor = node.parent;
        }
        moves.reverse();
        moves
    }
}

/// Solves `start` optimally with A*.
///
/// # Errors
/// - [`PuzzleError::Unsolvable`] if the board fails the parity check; A* never runs.
/// - [`PuzzleError::LimitReached`] if a bound in `options` stopped the search.
/// - [`PuzzleError::SearchExhausted`] if the frontier emptied, which signals a solver bug.
///
/// # Examples
/// ```
/// use puzzle24_solver::engine::{Board, Direction};
/// use puzzle24_solver::solver::{solve, SearchOptions};
///
/// let start = Board::goal().apply_move(Direction::Up).unwrap();
/// let solution = solve(&start, SearchOptions::default()).unwrap();
/// assert_eq!(solution.moves, vec![Direction::Down]);
/// assert_eq!(solution.cost, 1);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(heuristic = %options.heuristic))]
pub fn solve(start: &Board, options: SearchOptions) -> Result<Solution, PuzzleError> {
    SearchEngine::new(*start, options)?.run()
}

/// Validates a raw row-major tile sequence and solves it.
///
/// # Errors
/// [`PuzzleError::InvalidBoardShape`] if `labels` is not a permutation of
/// `0..=24`, otherwise as for [`solve`].
pub fn solve_tiles(labels: &[u8], options: SearchOptions) -> Result<Solution, PuzzleError> {
    let start = Board::from_tiles(labels)?;
    solve(&start, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardShapeError;

    fn goal_after(moves: &[Direction]) -> Board {
        *Board::goal().apply_moves(moves).unwrap().last().unwrap()
    }

    #[test]
    fn test_solve_goal_board() {
        let solution = solve(&Board::goal(), SearchOptions::default()).unwrap();
        assert!(solution.moves.is_empty());
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.stats.nodes_expanded, 1);
        assert_eq!(solution.stats.nodes_generated, 0);
    }

    #[test]
    fn test_solve_reverses_short_scramble() {
        let start = goal_after(&[Direction::Up, Direction::Left, Direction::Left]);
        let solution = solve(&start, SearchOptions::default()).unwrap();
        assert_eq!(
            solution.moves,
            vec![Direction::Right, Direction::Right, Direction::Down]
        );
        assert_eq!(solution.cost, 3);
        let boards = solution.boards(&start).unwrap();
        assert!(boards.last().unwrap().is_goal());
    }

    #[test]
    fn test_cost_matches_move_count() {
        let start = Board::scrambled(3, 14);
        for heuristic in [Heuristic::MisplacedTiles, Heuristic::Manhattan] {
            let options = SearchOptions::default().with_heuristic(heuristic);
            let solution = solve(&start, options).unwrap();
            assert_eq!(solution.cost as usize, solution.moves.len());
            assert!(solution.cost <= 14);
        }
    }

    #[test]
    fn test_unsolvable_board_is_rejected_before_search() {
        let mut labels = Board::goal().tiles().to_vec();
        labels.swap(0, 1);
        let start = Board::from_tiles(&labels).unwrap();
        let error = SearchEngine::new(start, SearchOptions::default()).unwrap_err();
        assert_eq!(error, PuzzleError::Unsolvable { inversions: 1 });
        assert!(error.stats().is_none());
    }

    #[test]
    fn test_solve_tiles_rejects_bad_shape() {
        let error = solve_tiles(&[0; 25], SearchOptions::default()).unwrap_err();
        assert_eq!(
            error,
            PuzzleError::InvalidBoardShape(BoardShapeError::DuplicateTile { tile: 0 })
        );
        assert!(error.to_string().starts_with("invalid board:"));
    }

    #[test]
    fn test_solve_tiles_solves_valid_labels() {
        let start = Board::goal().apply_move(Direction::Left).unwrap();
        let solution = solve_tiles(start.tiles(), SearchOptions::default()).unwrap();
        assert_eq!(solution.moves, vec![Direction::Right]);
    }

    #[test]
    fn test_expansion_limit_stops_search() {
        let start = Board::scrambled(11, 30);
        let options = SearchOptions::default()
            .with_heuristic(Heuristic::MisplacedTiles)
            .with_max_expansions(5);
        match solve(&start, options) {
            Err(PuzzleError::LimitReached { limit, stats }) => {
                assert_eq!(limit, SearchLimit::MaxExpansions(5));
                assert_eq!(stats.nodes_expanded, 5);
            }
            // A scramble that happens to be solved within five expansions.
            Ok(solution) => assert!(solution.stats.nodes_expanded <= 5),
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_zero_time_limit_stops_search() {
        let start = Board::scrambled(5, 40);
        let options = SearchOptions::default().with_time_limit(Duration::ZERO);
        let error = solve(&start, options).unwrap_err();
        assert!(matches!(
            error,
            PuzzleError::LimitReached {
                limit: SearchLimit::TimeLimit(_),
                ..
            }
        ));
        assert!(error.stats().is_some());
    }

    #[test]
    fn test_reversal_suppression_does_not_change_result() {
        let start = Board::scrambled(21, 18);
        let with = solve(&start, SearchOptions::default()).unwrap();
        let without = solve(
            &start,
            SearchOptions::default().with_suppress_reversals(false),
        )
        .unwrap();
        assert_eq!(with.moves, without.moves);
        assert_eq!(with.stats.nodes_expanded, without.stats.nodes_expanded);
        assert_eq!(with.stats.nodes_generated, without.stats.nodes_generated);
    }

    #[test]
    fn test_stats_are_consistent() {
        let start = Board::scrambled(8, 20);
        let solution = solve(&start, SearchOptions::default()).unwrap();
        let stats = solution.stats;
        assert!(stats.nodes_expanded >= solution.cost as u64 + 1);
        assert!(stats.nodes_generated >= solution.cost as u64);
        assert!(stats.max_frontier >= 1);
    }

    #[test]
    fn test_limit_display() {
        assert_eq!(
            SearchLimit::MaxExpansions(10).to_string(),
            "the expansion limit of 10"
        );
        assert_eq!(
            SearchLimit::TimeLimit(Duration::from_millis(1500)).to_string(),
            "the time limit of 1.500s"
        );
    }
}
