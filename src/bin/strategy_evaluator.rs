use clap::Parser;
use env_logger::Env;
use log::warn;
use std::collections::HashMap;
use tile_search::engine::State;
use tile_search::heuristics::EvaluationPolicy;
use tile_search::session::{SearchOptions, SearchSession};
use tile_search::solver::Strategy;
use tile_search::PuzzleError;

const GOAL: &str = "1 2 3 8 0 4 7 6 5";

const REFERENCE_BOARDS: [(&str, &str); 3] = [
    ("easy", "1 3 4 8 6 2 7 0 5"),
    ("medium", "2 8 1 0 4 3 7 6 5"),
    ("hard", "5 6 7 4 0 8 3 2 1"),
];

const PAIRINGS: [(Strategy, EvaluationPolicy); 8] = [
    (Strategy::BreadthFirst, EvaluationPolicy::None),
    (Strategy::DepthFirst, EvaluationPolicy::None),
    (Strategy::IterativeDeepening, EvaluationPolicy::None),
    (Strategy::UniformCost, EvaluationPolicy::CumulativeCost),
    (Strategy::Greedy, EvaluationPolicy::Greedy),
    (Strategy::AStar, EvaluationPolicy::AstarMisplaced),
    (Strategy::AStar, EvaluationPolicy::AstarManhattan),
    (Strategy::AStar, EvaluationPolicy::AstarWeightedManhattan),
];

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of seeded random boards to add to the reference boards
    #[clap(short = 'n', long, default_value_t = 20)]
    scrambles: usize,

    /// Random moves applied to the goal to build each scrambled board
    #[clap(short = 'k', long, default_value_t = 30)]
    scramble_moves: usize,

    /// Seed of the first scrambled board; later boards use the following seeds
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Per-search cap on explored nodes
    #[clap(short, long, default_value_t = 1_000_000)]
    max_explored: u64,
}

/// Totals for one pairing across every board it solved.
#[derive(Default)]
struct Totals {
    solved: u64,
    capped: u64,
    length: u64,
    cost: u64,
    explored: u64,
    space: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let goal: State = GOAL.parse()?;
    let mut boards: Vec<(String, State)> = Vec::new();
    for (name, text) in REFERENCE_BOARDS {
        boards.push((name.to_string(), text.parse()?));
    }
    for i in 0..args.scrambles {
        let seed = args.seed + i as u64;
        boards.push((format!("seed {}", seed), State::scrambled(&goal, args.scramble_moves, seed)));
    }

    let options = SearchOptions::default().with_max_explored(args.max_explored);
    let mut totals: HashMap<(Strategy, EvaluationPolicy), Totals> = HashMap::new();

    println!("Evaluating {} pairings on {} boards...", PAIRINGS.len(), boards.len());

    for (name, initial) in &boards {
        println!("\nBoard {}: {}", name, initial.to_text());
        for (strategy, policy) in PAIRINGS {
            let entry = totals.entry((strategy, policy)).or_default();
            let mut session = SearchSession::new(strategy, policy, initial.clone(), goal.clone())
                .with_options(options);
            let (label, evaluation) = (session.strategy(), session.policy());
            match session.search() {
                Ok(true) => {
                    let stats = session.statistics();
                    println!(
                        "  {:<20} {:<26} Length = {:<5} Cost = {:<6} Time = {:<8} Space = {}",
                        label,
                        evaluation,
                        stats.solution_length,
                        stats.solution_cost,
                        stats.nodes_explored,
                        stats.max_frontier_size
                    );
                    entry.solved += 1;
                    entry.length += stats.solution_length;
                    entry.cost += stats.solution_cost;
                    entry.explored += stats.nodes_explored;
                    entry.space += stats.max_frontier_size;
                }
                Ok(false) => warn!("{} using {} found no path from {}", label, evaluation, name),
                Err(PuzzleError::ExplorationLimitExceeded(limit)) => {
                    println!("  {:<20} {:<26} gave up after {} nodes", label, evaluation, limit);
                    entry.capped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    println!("\n--- Averages over solved boards ---");
    for (strategy, policy) in PAIRINGS {
        let Some(t) = totals.get(&(strategy, policy)) else {
            continue;
        };
        if t.solved == 0 {
            println!("{:<20} {:<26} no boards solved", strategy, policy);
            continue;
        }
        let n = t.solved as f64;
        println!(
            "{:<20} {:<26} Length = {:<8.2} Cost = {:<8.2} Time = {:<10.1} Space = {:<10.1} (capped {})",
            strategy,
            policy,
            t.length as f64 / n,
            t.cost as f64 / n,
            t.explored as f64 / n,
            t.space as f64 / n,
            t.capped
        );
    }
    Ok(())
}
