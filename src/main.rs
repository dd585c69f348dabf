use clap::Parser;
use rayon::prelude::*;
use slide_solver::config::{DEFAULT_MAX_CONFIGURATIONS, DEFAULT_PUZZLE};
use slide_solver::puzzles::{find_puzzle, Puzzle, PuzzleError, PUZZLES};
use slide_solver::solve_puzzle::{solve_puzzle, Outcome, SearchError, SearchLimits};
use slide_solver::util::{format_moves, replay};
use std::env;
use std::process::ExitCode;
use std::time::Instant;
use thousands::Separable;

/// Finds the shortest solution of a sliding block puzzle.
#[derive(Parser)]
#[command(name = "slide_solver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle to solve (see --list).
    #[arg(default_value = DEFAULT_PUZZLE)]
    puzzle: String,

    /// Solve every known puzzle in parallel and print a summary.
    #[arg(long)]
    all: bool,

    /// List the known puzzles.
    #[arg(long)]
    list: bool,

    /// Print only the move list, without a board diagram per step.
    #[arg(long, short)]
    quiet: bool,

    /// Give up after this many distinct configurations.
    #[arg(long)]
    max_configurations: Option<usize>,
}

fn get_num_cores() -> usize {
    env::var("CORES")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or_else(num_cpus::get)
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Replay(#[from] slide_solver::util::ReplayError),
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let limits = SearchLimits {
        max_configurations: cli.max_configurations.or(DEFAULT_MAX_CONFIGURATIONS),
    };

    let result = if cli.list {
        list_puzzles();
        Ok(true)
    } else if cli.all {
        solve_all(limits)
    } else {
        find_puzzle(&cli.puzzle)
            .map_err(RunError::from)
            .and_then(|puzzle| solve_one(puzzle, limits, cli.quiet))
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn list_puzzles() {
    for puzzle in PUZZLES.iter() {
        println!("{:<12} {}", puzzle.name, puzzle.description);
    }
}

/// Returns whether a solution was found.
fn solve_one(puzzle: &Puzzle, limits: SearchLimits, quiet: bool) -> Result<bool, RunError> {
    let start = puzzle.start_board()?;
    let stopwatch = Instant::now();
    let outcome = solve_puzzle(start.clone(), puzzle.goal(), limits)?;
    let elapsed = stopwatch.elapsed();

    let solution = match outcome {
        Outcome::Solved(solution) => solution,
        Outcome::Unsolvable(stats) => {
            println!(
                "Couldn't find solution ({} configurations)",
                stats.configurations.separate_with_commas()
            );
            return Ok(false);
        }
    };

    println!(
        "Found solution ({} moves, {} configurations, {} skipped) in {} ms:",
        solution.len(),
        solution.stats.configurations.separate_with_commas(),
        solution.stats.skipped.separate_with_commas(),
        elapsed.as_millis()
    );

    if quiet {
        print!("{}", format_moves(solution.moves()));
        return Ok(true);
    }

    let boards = replay(&start, solution.moves())?;
    print!("{}", boards[0]);
    for (i, (mv, board)) in solution.moves().iter().zip(&boards[1..]).enumerate() {
        println!("{}: {mv}", i + 1);
        print!("{board}");
    }
    Ok(true)
}

/// Each puzzle gets its own independent search.
fn solve_all(limits: SearchLimits) -> Result<bool, RunError> {
    let cores = get_num_cores();
    log::info!("Solving {} puzzles with {cores} cores", PUZZLES.len());
    let pool = rayon::ThreadPoolBuilder::new().num_threads(cores).build()?;

    let results: Vec<(&'static str, Result<Outcome, RunError>)> = pool.install(|| {
        PUZZLES
            .par_iter()
            .map(|puzzle| {
                let outcome = puzzle
                    .start_board()
                    .map_err(RunError::from)
                    .and_then(|start| solve_puzzle(start, puzzle.goal(), limits).map_err(RunError::from));
                (puzzle.name, outcome)
            })
            .collect()
    });

    let mut all_solved = true;
    for (name, result) in results {
        match result {
            Ok(Outcome::Solved(solution)) => println!(
                "{name:<12} {:>4} moves, {:>8} configurations",
                solution.len(),
                solution.stats.configurations.separate_with_commas()
            ),
            Ok(Outcome::Unsolvable(stats)) => {
                all_solved = false;
                println!(
                    "{name:<12} no solution, {:>8} configurations",
                    stats.configurations.separate_with_commas()
                );
            }
            Err(e) => {
                all_solved = false;
                println!("{name:<12} error: {e}");
            }
        }
    }
    Ok(all_solved)
}
