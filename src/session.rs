//! One search from an initial state to a goal state.

use std::fmt;

use log::{debug, info};

use crate::engine::State;
use crate::errors::Result;
use crate::heuristics::EvaluationPolicy;
use crate::node::{Node, NodeId, SearchTree};
use crate::solver::Strategy;
use crate::stats::{SearchStatistics, StatsCollector};

/// Tunables for a search beyond the strategy and policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fail with `PuzzleError::ExplorationLimitExceeded` after this many nodes have been
    /// explored without reaching the goal. `None` searches until the space is exhausted.
    pub max_explored: Option<u64>,
}

impl SearchOptions {
    pub fn with_max_explored(mut self, max_explored: u64) -> Self {
        self.max_explored = Some(max_explored);
        self
    }
}

/// Binds a strategy and an evaluation policy to an initial and a goal state and owns
/// everything one search produces: the tree, the statistics and, on success, the
/// solution path.
///
/// # Examples
/// ```
/// use tile_search::heuristics::EvaluationPolicy;
/// use tile_search::session::SearchSession;
/// use tile_search::solver::Strategy;
///
/// let mut session = SearchSession::from_text(
///     Strategy::UniformCost,
///     EvaluationPolicy::CumulativeCost,
///     "1 3 4 8 6 2 7 0 5",
///     "1 2 3 8 0 4 7 6 5",
/// )
/// .unwrap();
/// assert!(session.search().unwrap());
/// assert_eq!(session.statistics().solution_length, 5);
/// assert_eq!(session.statistics().solution_cost, 17);
/// assert_eq!(session.solution().unwrap().len(), 6);
/// ```
#[derive(Debug)]
pub struct SearchSession {
    strategy: Strategy,
    policy: EvaluationPolicy,
    goal: State,
    options: SearchOptions,
    tree: SearchTree,
    stats: StatsCollector,
    terminal: Option<NodeId>,
}

impl SearchSession {
    /// Creates a session that has not searched yet.
    pub fn new(strategy: Strategy, policy: EvaluationPolicy, initial: State, goal: State) -> Self {
        SearchSession {
            strategy,
            policy,
            goal,
            options: SearchOptions::default(),
            tree: SearchTree::new(initial),
            stats: StatsCollector::new(),
            terminal: None,
        }
    }

    /// Like `new`, parsing both boards from text.
    ///
    /// # Returns
    /// `Err` with the parse error of the first invalid board.
    pub fn from_text(
        strategy: Strategy,
        policy: EvaluationPolicy,
        initial: &str,
        goal: &str,
    ) -> Result<Self> {
        Ok(SearchSession::new(strategy, policy, initial.parse()?, goal.parse()?))
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn policy(&self) -> EvaluationPolicy {
        self.policy
    }

    pub fn initial(&self) -> &State {
        self.tree[self.tree.root()].state()
    }

    pub fn goal(&self) -> &State {
        &self.goal
    }

    /// Runs the strategy from the initial state.
    ///
    /// Any earlier result of this session is discarded first, so calling `search`
    /// twice yields the same outcome twice.
    ///
    /// # Returns
    /// * `Ok(true)` if the goal was reached; `solution` then returns the path.
    /// * `Ok(false)` if the goal is unreachable.
    /// * `Err(PuzzleError::ExplorationLimitExceeded)` if the exploration cap was hit.
    pub fn search(&mut self) -> Result<bool> {
        self.tree.prune_to_root();
        self.stats = StatsCollector::new();
        self.terminal = None;

        debug!(
            "searching {} -> {} with {} using {}",
            self.initial().to_text(),
            self.goal.to_text(),
            self.strategy,
            self.policy
        );
        self.terminal = self.strategy.search(
            &mut self.tree,
            &self.goal,
            self.policy,
            &mut self.stats,
            self.options.max_explored,
        )?;

        match self.terminal {
            Some(_) => info!("{} using {}: {}", self.strategy, self.policy, self.stats.summary()),
            None => info!(
                "{} using {}: goal unreachable after exploring {} nodes",
                self.strategy,
                self.policy,
                self.stats.nodes_explored()
            ),
        }
        Ok(self.terminal.is_some())
    }

    /// The solution path from the initial node to the goal node, or `None` if the last
    /// search failed or no search has run.
    pub fn solution(&self) -> Option<Vec<&Node>> {
        self.terminal.and_then(|id| self.tree.path_to(id).ok())
    }

    /// The boards along the solution path, in order.
    pub fn solution_states(&self) -> Option<Vec<State>> {
        self.solution()
            .map(|path| path.into_iter().map(|node| node.state().clone()).collect())
    }

    /// Counters from the last search.
    pub fn statistics(&self) -> SearchStatistics {
        self.stats.summary()
    }
}

impl fmt::Display for SearchSession {
    /// Two-line report: the problem, then the strategy, policy and counters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Initial state: {} ---> Goal state: {}",
            self.initial().to_text(),
            self.goal.to_text()
        )?;
        write!(
            f,
            "{} using f(n)= {} :: {}",
            self.strategy,
            self.policy,
            self.stats.summary()
        )
    }
}
