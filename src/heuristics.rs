use crate::engine::{Grid, State, Transformation, CELL_COUNT, GRID_SIZE};
use crate::node::Node;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Names the ordering a search uses to rank nodes.
///
/// Every policy reduces a node to an integer cost (see `State::cost_to_goal`); lower
/// costs rank first. Ties are broken by the move that produced the node and finally
/// by the board itself, so two distinct states never compare as equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum EvaluationPolicy {
    /// Cost of the last move only. Used by the uninformed strategies to fix the
    /// order in which children are expanded.
    None,
    /// Cumulative cost from the initial state, g(n).
    CumulativeCost,
    /// Number of cells that differ from the goal, h(n).
    Greedy,
    /// g(n) plus the number of cells that differ from the goal.
    AstarMisplaced,
    /// g(n) plus the sum of Manhattan distances to each tile's goal cell.
    AstarManhattan,
    /// g(n) plus the sum of Manhattan distances weighted by tile value.
    /// Deliberately inadmissible.
    AstarWeightedManhattan,
}

impl EvaluationPolicy {
    /// All policies, in declaration order.
    pub const ALL: [EvaluationPolicy; 6] = [
        EvaluationPolicy::None,
        EvaluationPolicy::CumulativeCost,
        EvaluationPolicy::Greedy,
        EvaluationPolicy::AstarMisplaced,
        EvaluationPolicy::AstarManhattan,
        EvaluationPolicy::AstarWeightedManhattan,
    ];

    /// The key nodes are ranked by: evaluation cost, producing move, board.
    pub fn ordering_key(&self, node: &Node, goal: &State) -> (u32, Transformation, Grid) {
        let state = node.state();
        (
            node.evaluation_cost(*self, goal),
            state.predecessor(),
            *state.grid(),
        )
    }

    /// Compares two nodes under this policy.
    ///
    /// Returns `Ordering::Equal` only for nodes holding the same board reached by the
    /// same move, never for two different boards.
    pub fn compare(&self, a: &Node, b: &Node, goal: &State) -> Ordering {
        self.ordering_key(a, goal).cmp(&self.ordering_key(b, goal))
    }

    /// Sorts `nodes` into the order this policy ranks them.
    pub fn sort(&self, nodes: &mut [Node], goal: &State) {
        nodes.sort_by_cached_key(|node| self.ordering_key(node, goal));
    }
}

impl fmt::Display for EvaluationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EvaluationPolicy::None => "none",
            EvaluationPolicy::CumulativeCost => "cumulative-cost",
            EvaluationPolicy::Greedy => "greedy",
            EvaluationPolicy::AstarMisplaced => "astar-misplaced",
            EvaluationPolicy::AstarManhattan => "astar-manhattan",
            EvaluationPolicy::AstarWeightedManhattan => "astar-weighted-manhattan",
        };
        f.pad(name)
    }
}

impl FromStr for EvaluationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <EvaluationPolicy as clap::ValueEnum>::from_str(s, true)
            .map_err(|_| format!("Unknown evaluation policy '{}'", s))
    }
}

/// Indexes the goal board by tile value: entry `v` holds the (row, column) of tile `v`.
fn goal_positions(goal: &State) -> [(usize, usize); CELL_COUNT] {
    let mut positions = [(0, 0); CELL_COUNT];
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            positions[goal.tile(r, c) as usize] = (r, c);
        }
    }
    positions
}

/// Counts the cells whose value differs from the goal board.
///
/// The blank cell is compared like any other, so the count is `0` exactly when the
/// boards are equal.
///
/// # Arguments
/// * `current`: The state to evaluate.
/// * `goal`: The target state.
///
/// # Returns
/// The number of mismatched cells as `u32`.
pub fn misplaced_tiles(current: &State, goal: &State) -> u32 {
    let mut count = 0;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            if current.tile(r, c) != goal.tile(r, c) {
                count += 1;
            }
        }
    }
    debug_assert_eq!(count == 0, current == goal);
    count
}

/// Sums, over every cell value, the row plus column distance between its current
/// cell and its cell on the goal board. The blank is included.
///
/// # Returns
/// The total Manhattan distance as `u32`; `0` exactly when the boards are equal.
pub fn manhattan_distance(current: &State, goal: &State) -> u32 {
    weighted_distance(current, goal, |_| 1)
}

/// Like `manhattan_distance`, but each tile's distance is multiplied by its value.
///
/// The blank therefore contributes nothing. Any board other than the goal still
/// scores above zero because at least one numbered tile is out of place.
pub fn weighted_manhattan_distance(current: &State, goal: &State) -> u32 {
    weighted_distance(current, goal, |value| value as u32)
}

fn weighted_distance(current: &State, goal: &State, weight: impl Fn(u8) -> u32) -> u32 {
    let positions = goal_positions(goal);
    let mut total = 0;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let value = current.tile(r, c);
            let (goal_r, goal_c) = positions[value as usize];
            let distance = (r.abs_diff(goal_r) + c.abs_diff(goal_c)) as u32;
            total += distance * weight(value);
        }
    }
    debug_assert_eq!(total == 0, current == goal);
    total
}
