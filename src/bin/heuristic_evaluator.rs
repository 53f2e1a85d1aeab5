use clap::Parser;
use puzzle24_solver::engine::Board;
use puzzle24_solver::heuristics::Heuristic;
use puzzle24_solver::solver::{solve, SearchOptions};
use std::collections::HashMap;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare h1 and h2 on seeded scrambles", long_about = None)]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Random blank moves applied to the goal to build each board
    #[clap(short, long, default_value_t = 20)]
    scramble_moves: usize,

    /// Seed of the first board; board i uses seed + i
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Per-search expansion cap, so h1 cannot run away on deep scrambles
    #[clap(long, default_value_t = 2_000_000)]
    max_expansions: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let heuristics = [Heuristic::MisplacedTiles, Heuristic::Manhattan];

    let mut expansions: HashMap<Heuristic, Vec<u64>> = HashMap::new();
    let mut mismatches = 0;

    println!(
        "Starting heuristic evaluation for {} boards ({} scramble moves)...",
        args.boards, args.scramble_moves
    );

    for board_idx in 0..args.boards {
        let seed = args.seed + board_idx as u64;
        let start = Board::scrambled(seed, args.scramble_moves);
        println!("\nEvaluating Board {} (Seed: {})", board_idx, seed);

        let mut costs = Vec::new();
        for &heuristic in &heuristics {
            let options = SearchOptions::default()
                .with_heuristic(heuristic)
                .with_max_expansions(args.max_expansions);
            match solve(&start, options) {
                Ok(solution) => {
                    println!(
                        "  Heuristic: {:<3}, Cost: {:<4}, Expanded: {:<9}, Generated: {}",
                        heuristic,
                        solution.cost,
                        solution.stats.nodes_expanded,
                        solution.stats.nodes_generated
                    );
                    costs.push(solution.cost);
                    expansions
                        .entry(heuristic)
                        .or_default()
                        .push(solution.stats.nodes_expanded);
                }
                Err(e) => println!("  Heuristic: {:<3}, {}", heuristic, e),
            }
        }

        if costs.windows(2).any(|pair| pair[0] != pair[1]) {
            tracing::error!(seed, ?costs, "heuristics disagree on the optimal cost");
            mismatches += 1;
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Average Nodes Expanded ---");
    for heuristic in heuristics {
        match expansions.get(&heuristic) {
            Some(counts) if !counts.is_empty() => {
                let total: u64 = counts.iter().sum();
                let average = total as f64 / counts.len() as f64;
                println!(
                    "Heuristic {:<3}: {:.1} over {} solved boards",
                    heuristic,
                    average,
                    counts.len()
                );
            }
            _ => println!("Heuristic {:<3}: no boards solved", heuristic),
        }
    }

    if mismatches > 0 {
        println!("\n{} boards had differing solution costs", mismatches);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
