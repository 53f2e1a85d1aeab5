use clap::Parser;
use puzzle24_solver::engine::Board;
use puzzle24_solver::error::PuzzleError;
use puzzle24_solver::heuristics::Heuristic;
use puzzle24_solver::solver::{solve, SearchOptions, SearchStats};
use puzzle24_solver::utils::board_from_csv;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve the 24-puzzle optimally with A*", long_about = None)]
struct Args {
    /// Heuristic to guide the search: h1 (misplaced tiles) or h2 (Manhattan distance)
    #[clap(short = 'H', long, default_value = "h2")]
    heuristic: Heuristic,

    /// Print every intermediate board along the solution
    #[clap(short, long)]
    verbose: bool,

    /// Give up after expanding this many nodes
    #[clap(long)]
    max_expansions: Option<u64>,

    /// Give up after this many seconds
    #[clap(short, long)]
    timeout: Option<f64>,

    /// Board as 25 comma-separated tiles in row-major order, 0 for the blank.
    /// Read from standard input when omitted.
    board: Option<String>,
}

fn read_board_line() -> io::Result<String> {
    print!("Enter puzzle (comma separated): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn print_stats(stats: &SearchStats) {
    println!("Nodes Expanded: {}", stats.nodes_expanded);
    println!("Nodes Generated: {}", stats.nodes_generated);
    println!("Max Frontier Size: {}", stats.max_frontier);
    println!("Elapsed: {:.3}s", stats.elapsed.as_secs_f64());
}

fn options_from_args(args: &Args) -> Result<SearchOptions, String> {
    let mut options = SearchOptions::default().with_heuristic(args.heuristic);
    if let Some(max) = args.max_expansions {
        options = options.with_max_expansions(max);
    }
    if let Some(seconds) = args.timeout {
        let limit = Duration::try_from_secs_f64(seconds)
            .map_err(|e| format!("invalid timeout {}: {}", seconds, e))?;
        options = options.with_time_limit(limit);
    }
    Ok(options)
}

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    let args = Args::parse();

    let options = match options_from_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Input Error: {}", message);
            return ExitCode::from(2);
        }
    };

    let raw = match &args.board {
        Some(board) => board.clone(),
        None => match read_board_line() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read board: {}", e);
                return ExitCode::from(2);
            }
        },
    };

    let start: Board = match board_from_csv(&raw).map_err(PuzzleError::from) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Input Error: {}", e);
            return ExitCode::from(2);
        }
    };

    println!("Initial board:\n{}\n", start);
    tracing::info!(heuristic = %options.heuristic, "running A* search");

    match solve(&start, options) {
        Ok(solution) => {
            println!("Solution Found!");
            let moves: String = solution.moves.iter().map(|m| m.to_char()).collect();
            println!("Moves: {}", if moves.is_empty() { "(none)" } else { moves.as_str() });
            if args.verbose {
                if let Some(boards) = solution.boards(&start) {
                    for (i, (direction, board)) in solution.moves.iter().zip(&boards).enumerate() {
                        println!("\nMove {}: {}\n{}", i + 1, direction, board);
                    }
                    println!();
                }
            }
            println!("Total Moves: {}", solution.cost);
            print_stats(&solution.stats);
            ExitCode::SUCCESS
        }
        Err(PuzzleError::Unsolvable { inversions }) => {
            println!(
                "This puzzle is NOT solvable ({} inversions, odd parity).",
                inversions
            );
            ExitCode::from(1)
        }
        Err(error) => {
            // Limits and exhaustion both still carry the work done so far.
            println!("Search ended: {}", error);
            if let Some(stats) = error.stats() {
                print_stats(stats);
            }
            if matches!(error, PuzzleError::SearchExhausted { .. }) {
                ExitCode::from(3)
            } else {
                ExitCode::from(4)
            }
        }
    }
}
