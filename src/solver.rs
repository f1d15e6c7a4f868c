use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::engine::State;
use crate::errors::{PuzzleError, Result};
use crate::frontier::{Discipline, Frontier, LinearFrontier, PriorityFrontier};
use crate::heuristics::EvaluationPolicy;
use crate::node::{NodeId, SearchTree};
use crate::stats::StatsCollector;

/// How often, in explored nodes, a running search logs its progress.
const PROGRESS_INTERVAL: u64 = 10_000;

/// The search algorithms available to a `SearchSession`.
///
/// Every strategy runs the same loop: record the frontier size, remove a node, count
/// it as explored, stop if it holds the goal, otherwise mark its state explored and
/// offer its unexplored children (sorted by the evaluation policy) to the frontier.
/// The strategies differ only in the frontier they use.
///
/// [`SearchSession`]: crate::session::SearchSession
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// FIFO frontier.
    BreadthFirst,
    /// LIFO frontier. Children are pushed in policy order, so the last one is explored
    /// first.
    DepthFirst,
    /// Repeated depth-limited passes of `DepthFirst`, starting at limit 0.
    IterativeDeepening,
    /// Lowest evaluation cost first, one frontier entry per state.
    UniformCost,
    /// Same frontier as `UniformCost`; meant to be paired with `EvaluationPolicy::Greedy`.
    Greedy,
    /// Same frontier as `UniformCost`; meant to be paired with an A* policy.
    AStar,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 6] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::IterativeDeepening,
        Strategy::UniformCost,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// The policy this strategy is conventionally run with.
    ///
    /// # Examples
    /// ```
    /// use tile_search::heuristics::EvaluationPolicy;
    /// use tile_search::solver::Strategy;
    ///
    /// assert_eq!(Strategy::UniformCost.default_policy(), EvaluationPolicy::CumulativeCost);
    /// assert_eq!(Strategy::BreadthFirst.default_policy(), EvaluationPolicy::None);
    /// ```
    pub fn default_policy(self) -> EvaluationPolicy {
        match self {
            Strategy::BreadthFirst | Strategy::DepthFirst | Strategy::IterativeDeepening => {
                EvaluationPolicy::None
            }
            Strategy::UniformCost => EvaluationPolicy::CumulativeCost,
            Strategy::Greedy => EvaluationPolicy::Greedy,
            Strategy::AStar => EvaluationPolicy::AstarManhattan,
        }
    }

    /// Searches `tree`, grown from its root, for a node holding `goal`.
    ///
    /// # Arguments
    /// * `tree`: A tree holding only its root. Explored nodes are attached to it.
    /// * `goal`: The state to reach.
    /// * `policy`: Orders children and, for the priority strategies, the frontier.
    /// * `stats`: Receives the explored count, the frontier peak and, on success, the
    ///   solution length and cost.
    /// * `max_explored`: Optional cap on explored nodes. Checked before each removal,
    ///   so a search never explores more than the cap.
    ///
    /// # Returns
    /// * `Ok(Some(id))` with the position of the goal node in `tree`.
    /// * `Ok(None)` if the reachable space holds no goal.
    /// * `Err(PuzzleError::ExplorationLimitExceeded)` if the cap was hit first.
    pub fn search(
        self,
        tree: &mut SearchTree,
        goal: &State,
        policy: EvaluationPolicy,
        stats: &mut StatsCollector,
        max_explored: Option<u64>,
    ) -> Result<Option<NodeId>> {
        let mut explorer = Explorer {
            tree,
            goal,
            policy,
            stats,
            max_explored,
            explored: HashSet::new(),
        };
        match self {
            Strategy::BreadthFirst => {
                explorer.single_pass(LinearFrontier::new(Discipline::Fifo))
            }
            Strategy::DepthFirst => explorer.single_pass(LinearFrontier::new(Discipline::Lifo)),
            Strategy::IterativeDeepening => explorer.deepening(),
            Strategy::UniformCost | Strategy::Greedy | Strategy::AStar => {
                explorer.single_pass(PriorityFrontier::new())
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::DepthFirst => "depth-first",
            Strategy::IterativeDeepening => "iterative-deepening",
            Strategy::UniformCost => "uniform-cost",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "a-star",
        };
        f.pad(name)
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        <Strategy as clap::ValueEnum>::from_str(s, true)
            .map_err(|_| format!("Unknown search strategy '{}'", s))
    }
}

/// Result of one pass over a frontier.
struct Pass {
    found: Option<NodeId>,
    /// Whether a node was left unexpanded because it sat on the depth limit.
    truncated: bool,
}

/// State shared by every pass of one search.
struct Explorer<'a> {
    tree: &'a mut SearchTree,
    goal: &'a State,
    policy: EvaluationPolicy,
    stats: &'a mut StatsCollector,
    max_explored: Option<u64>,
    explored: HashSet<State>,
}

impl Explorer<'_> {
    fn single_pass<F: Frontier>(&mut self, mut frontier: F) -> Result<Option<NodeId>> {
        Ok(self.run(&mut frontier, None)?.found)
    }

    /// Runs depth-limited passes with limits 0, 1, 2, ... until one finds the goal.
    ///
    /// Each pass starts over from the root with an empty explored set. A pass that
    /// never reaches its limit has seen the whole reachable space, which ends the
    /// search without a solution.
    fn deepening(&mut self) -> Result<Option<NodeId>> {
        let mut limit = 0;
        loop {
            debug!("iterative deepening: pass with depth limit {}", limit);
            self.tree.prune_to_root();
            self.explored.clear();
            let mut frontier = LinearFrontier::new(Discipline::Lifo);
            let pass = self.run(&mut frontier, Some(limit))?;
            if pass.found.is_some() {
                return Ok(pass.found);
            }
            if !pass.truncated {
                debug!("iterative deepening: space exhausted below depth {}", limit);
                return Ok(None);
            }
            limit += 1;
        }
    }

    fn run<F: Frontier>(&mut self, frontier: &mut F, depth_limit: Option<u32>) -> Result<Pass> {
        let root = self.tree.root();
        let root_cost = self.tree[root].evaluation_cost(self.policy, self.goal);
        frontier.seed(self.tree, root, root_cost);
        let mut truncated = false;

        while !frontier.is_empty() {
            if let Some(max) = self.max_explored {
                if self.stats.nodes_explored() >= max {
                    return Err(PuzzleError::ExplorationLimitExceeded(max));
                }
            }
            self.stats.record_max_frontier_size(frontier.len());
            let Some(id) = frontier.pop(self.tree) else {
                break;
            };
            self.stats.add_explored_count(1);
            let explored_so_far = self.stats.nodes_explored();

            let node = &self.tree[id];
            if node.state() == self.goal {
                self.stats.add_solution_path_length(node.depth() as u64);
                self.stats.add_solution_cost(node.state().cumulative_cost() as u64);
                return Ok(Pass {
                    found: Some(id),
                    truncated,
                });
            }

            if explored_so_far % PROGRESS_INTERVAL == 0 {
                trace!(
                    "explored {} nodes, frontier holds {}, current depth {}",
                    explored_so_far,
                    frontier.len(),
                    node.depth()
                );
            }

            let depth = node.depth();
            self.explored.insert(node.state().clone());
            if depth_limit.is_some_and(|limit| depth >= limit) {
                truncated = true;
                continue;
            }

            let mut children = self.tree.children(id)?;
            self.policy.sort(&mut children, self.goal);
            for child in children {
                if self.explored.contains(child.state()) {
                    continue;
                }
                let cost = child.evaluation_cost(self.policy, self.goal);
                frontier.offer(self.tree, child, cost)?;
            }
        }

        Ok(Pass {
            found: None,
            truncated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOAL: &str = "1 2 3 8 0 4 7 6 5";
    const EASY: &str = "1 3 4 8 6 2 7 0 5";

    fn run(
        strategy: Strategy,
        policy: EvaluationPolicy,
        initial: &str,
        max_explored: Option<u64>,
    ) -> (SearchTree, Result<Option<NodeId>>, StatsCollector) {
        let goal: State = GOAL.parse().unwrap();
        let mut tree = SearchTree::new(initial.parse().unwrap());
        let mut stats = StatsCollector::new();
        let found = strategy.search(&mut tree, &goal, policy, &mut stats, max_explored);
        (tree, found, stats)
    }

    #[test]
    fn test_initial_equals_goal() {
        for strategy in Strategy::ALL {
            let (tree, found, stats) = run(strategy, strategy.default_policy(), GOAL, None);
            assert_eq!(found.unwrap(), Some(tree.root()), "{}", strategy);
            let summary = stats.summary();
            assert_eq!(summary.nodes_explored, 1);
            assert_eq!(summary.max_frontier_size, 1);
            assert_eq!(summary.solution_length, 0);
            assert_eq!(summary.solution_cost, 0);
        }
    }

    #[test]
    fn test_one_move_from_goal() {
        let goal: State = GOAL.parse().unwrap();
        let initial = goal.apply(crate::engine::Transformation::Left).unwrap().to_text();
        for strategy in Strategy::ALL {
            let (tree, found, stats) = run(strategy, strategy.default_policy(), &initial, None);
            let id = found.unwrap().unwrap();
            assert_eq!(tree[id].depth(), 1, "{}", strategy);
            assert_eq!(stats.summary().solution_length, 1);
            assert_eq!(stats.summary().solution_cost, 8);
        }
    }

    #[test]
    fn test_breadth_first_easy() {
        let (tree, found, stats) = run(Strategy::BreadthFirst, EvaluationPolicy::None, EASY, None);
        let id = found.unwrap().unwrap();
        assert_eq!(tree[id].state().to_text(), GOAL);
        let summary = stats.summary();
        assert_eq!(summary.solution_length, 5);
        assert_eq!(summary.solution_cost, 17);
    }

    #[test]
    fn test_iterative_deepening_easy() {
        let (tree, found, stats) =
            run(Strategy::IterativeDeepening, EvaluationPolicy::None, EASY, None);
        let id = found.unwrap().unwrap();
        assert_eq!(tree[id].depth(), 5);
        assert_eq!(stats.summary().solution_cost, 17);
        // Explored nodes accumulate over passes 0..=5.
        assert!(stats.summary().nodes_explored > 43);
    }

    #[test]
    fn test_uniform_cost_easy() {
        let (_, found, stats) =
            run(Strategy::UniformCost, EvaluationPolicy::CumulativeCost, EASY, None);
        assert!(found.unwrap().is_some());
        assert_eq!(stats.summary().solution_length, 5);
        assert_eq!(stats.summary().solution_cost, 17);
    }

    #[test]
    fn test_depth_first_finds_a_path() {
        let (tree, found, stats) = run(Strategy::DepthFirst, EvaluationPolicy::None, EASY, None);
        let id = found.unwrap().unwrap();
        let path = tree.path_to(id).unwrap();
        assert_eq!(path.len() as u64, stats.summary().solution_length + 1);
        assert!(stats.summary().solution_cost >= 17);
        assert!(stats.summary().solution_length >= 5);
    }

    #[test]
    fn test_exploration_cap() {
        let (_, found, stats) =
            run(Strategy::BreadthFirst, EvaluationPolicy::None, EASY, Some(10));
        assert_eq!(found, Err(PuzzleError::ExplorationLimitExceeded(10)));
        assert_eq!(stats.nodes_explored(), 10);
    }

    #[test]
    fn test_zero_cap_explores_nothing() {
        for strategy in Strategy::ALL {
            let (_, found, stats) = run(strategy, strategy.default_policy(), EASY, Some(0));
            assert_eq!(found, Err(PuzzleError::ExplorationLimitExceeded(0)), "{}", strategy);
            assert_eq!(stats.nodes_explored(), 0);
        }
    }

    #[test]
    fn test_cap_does_not_hide_goal_on_last_node() {
        let (_, found, _) = run(Strategy::BreadthFirst, EvaluationPolicy::None, GOAL, Some(1));
        assert!(found.unwrap().is_some());
    }

    #[test]
    fn test_unreachable_goal_exhausts_space() {
        // Unsolvable, so all 181 440 boards of the other parity class are explored.
        let (_, found, stats) = run(
            Strategy::UniformCost,
            EvaluationPolicy::CumulativeCost,
            "2 1 3 8 0 4 7 6 5",
            None,
        );
        assert_eq!(found, Ok(None));
        assert_eq!(stats.summary().nodes_explored, 181_440);
        assert_eq!(stats.summary().solution_length, 0);
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            let parsed: Strategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
        assert_eq!("A-STAR".parse::<Strategy>(), Ok(Strategy::AStar));
        assert!("best-first".parse::<Strategy>().is_err());
    }
}
