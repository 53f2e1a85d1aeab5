use puzzle24_solver::engine::{Board, Direction};
use puzzle24_solver::error::{BoardShapeError, PuzzleError};
use puzzle24_solver::heuristics::Heuristic;
use puzzle24_solver::solvability::{inversion_count, is_solvable};
use puzzle24_solver::solver::{solve, solve_tiles, SearchOptions};
use puzzle24_solver::utils::board_from_csv;
use test_case::test_case;

const INITIAL_SET: &str = "2,11,0,4,5,6,1,3,9,12,8,19,13,7,10,18,17,14,15,20,16,21,22,23,24";

fn options(heuristic: Heuristic) -> SearchOptions {
    SearchOptions::default().with_heuristic(heuristic)
}

#[test_case(Heuristic::MisplacedTiles; "h1")]
#[test_case(Heuristic::Manhattan; "h2")]
fn test_start_at_goal(heuristic: Heuristic) {
    let solution = solve(&Board::goal(), options(heuristic)).unwrap();
    assert!(solution.moves.is_empty());
    assert_eq!(solution.cost, 0);
    assert!(solution.stats.nodes_expanded <= 1);
}

#[test_case(Direction::Up; "blank up")]
#[test_case(Direction::Left; "blank left")]
fn test_one_move_from_goal(direction: Direction) {
    let start = Board::goal().apply_move(direction).unwrap();
    for heuristic in [Heuristic::MisplacedTiles, Heuristic::Manhattan] {
        let solution = solve(&start, options(heuristic)).unwrap();
        assert_eq!(solution.moves, vec![direction.opposite()]);
        assert_eq!(solution.cost, 1);
    }
}

#[test]
fn test_initial_set_classification() {
    let board = board_from_csv(INITIAL_SET).unwrap();
    assert_eq!(inversion_count(&board), 40);
    assert!(is_solvable(&board));
}

/// h2 alone needs about 2.5 million expansions for this 50-move board, and h1
/// needs many times more memory and time. Run with `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn test_initial_set_h2_expands_no_more_than_h1() {
    let board = board_from_csv(INITIAL_SET).unwrap();
    let h2 = solve(&board, options(Heuristic::Manhattan)).unwrap();
    let h1 = solve(&board, options(Heuristic::MisplacedTiles)).unwrap();
    assert_eq!(h1.cost, h2.cost);
    assert!(h2.stats.nodes_expanded <= h1.stats.nodes_expanded);
}

#[test]
fn test_h2_expands_no_more_than_h1_on_scrambles() {
    for seed in 0..10 {
        let start = Board::scrambled(seed, 18);
        let h1 = solve(&start, options(Heuristic::MisplacedTiles)).unwrap();
        let h2 = solve(&start, options(Heuristic::Manhattan)).unwrap();
        assert_eq!(h1.cost, h2.cost, "seed {}", seed);
        assert!(
            h2.stats.nodes_expanded <= h1.stats.nodes_expanded,
            "seed {}: h2 expanded {} > h1 expanded {}",
            seed,
            h2.stats.nodes_expanded,
            h1.stats.nodes_expanded
        );
    }
}

#[test_case(0, 1; "first two tiles")]
#[test_case(3, 19; "distant tiles")]
#[test_case(22, 23; "last two tiles")]
fn test_single_transposition_is_unsolvable(a: usize, b: usize) {
    let mut labels = Board::goal().tiles().to_vec();
    labels.swap(a, b);
    let error = solve_tiles(&labels, SearchOptions::default()).unwrap_err();
    assert!(matches!(error, PuzzleError::Unsolvable { inversions } if inversions % 2 == 1));
}

#[test]
fn test_invalid_shape_is_reported_before_search() {
    let labels: Vec<u8> = (0..24).collect();
    let error = solve_tiles(&labels, SearchOptions::default()).unwrap_err();
    assert_eq!(
        error,
        PuzzleError::InvalidBoardShape(BoardShapeError::WrongLength { found: 24 })
    );
    assert!(error.stats().is_none());
}

#[test]
fn test_moderate_scramble_solution_replays_to_goal() {
    let start = Board::scrambled(2024, 30);
    let solution = solve(&start, options(Heuristic::Manhattan)).unwrap();
    let boards = solution.boards(&start).unwrap();
    assert_eq!(boards.len(), solution.moves.len());
    assert!(boards.last().map_or(start.is_goal(), Board::is_goal));
    assert!(solution.cost <= 30);
}
