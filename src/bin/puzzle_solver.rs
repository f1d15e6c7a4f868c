use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use std::fs;
use std::path::PathBuf;
use tile_search::engine::State;
use tile_search::heuristics::EvaluationPolicy;
use tile_search::session::{SearchOptions, SearchSession};
use tile_search::solver::Strategy;

const DEFAULT_GOAL: &str = "1 2 3 8 0 4 7 6 5";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy
    #[clap(short, long, value_enum, default_value_t = Strategy::AStar)]
    strategy: Strategy,

    /// Evaluation policy; defaults to the strategy's usual pairing
    #[clap(short, long, value_enum)]
    policy: Option<EvaluationPolicy>,

    /// Give up after exploring this many nodes
    #[clap(short, long)]
    max_explored: Option<u64>,

    /// File holding the initial board on its first line and, optionally, the goal on
    /// its second
    #[clap(short, long, conflicts_with = "initial")]
    board_file: Option<PathBuf>,

    /// Initial board, nine space-separated values, e.g. "1 3 4 8 6 2 7 0 5"
    initial: Option<String>,

    /// Goal board
    #[clap(default_value = DEFAULT_GOAL)]
    goal: String,
}

fn read_board_file(path: &PathBuf) -> anyhow::Result<(String, Option<String>)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file {}", path.display()))?;

    let mut lines = content.lines().map(str::trim).filter(|s| !s.is_empty());
    let initial = match lines.next() {
        Some(line) => line.to_string(),
        None => bail!("Board file {} is empty", path.display()),
    };
    Ok((initial, lines.next().map(str::to_string)))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (initial_text, goal_text) = match (&args.board_file, &args.initial) {
        (Some(path), _) => {
            let (initial, goal) = read_board_file(path)?;
            (initial, goal.unwrap_or_else(|| args.goal.clone()))
        }
        (None, Some(initial)) => (initial.clone(), args.goal.clone()),
        (None, None) => bail!("Provide an initial board or --board-file"),
    };

    let initial: State = initial_text
        .parse()
        .with_context(|| format!("Invalid initial board '{}'", initial_text))?;
    let goal: State = goal_text
        .parse()
        .with_context(|| format!("Invalid goal board '{}'", goal_text))?;
    if !initial.is_solvable_from(&goal) {
        bail!(
            "The goal '{}' cannot be reached from '{}'",
            goal.to_text(),
            initial.to_text()
        );
    }

    let policy = args.policy.unwrap_or_else(|| args.strategy.default_policy());
    let options = SearchOptions {
        max_explored: args.max_explored,
    };

    println!("Initial board:\n{}\n", initial);
    println!("Goal board:\n{}\n", goal);
    println!("Searching with {} using {}...\n", args.strategy, policy);

    let mut session = SearchSession::new(args.strategy, policy, initial, goal).with_options(options);
    let solved = session.search().context("Search aborted")?;

    println!("{}\n", session);
    match session.solution() {
        Some(path) if solved => {
            println!("Solution ({} moves):", path.len() - 1);
            for node in path {
                println!("  {}", node);
            }
        }
        _ => println!("No solution found.\n"),
    }
    Ok(())
}
