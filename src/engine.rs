//! Core puzzle engine for the 3x3 sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Transformation`: The four directions the blank can move in, plus a no-op sentinel.
//! - `State`: One immutable board configuration together with the cost of the
//!   moves that produced it. States know how to validate and apply moves and how to
//!   enumerate their successors.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::errors::{PuzzleError, Result};
use crate::heuristics::{self, EvaluationPolicy};
use crate::utils::{grid_from_str, grid_to_string};

/// Width and height of the board.
pub const GRID_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value used for the blank cell.
pub const BLANK: u8 = 0;

/// Row-major board representation.
pub type Grid = [[u8; GRID_SIZE]; GRID_SIZE];

/// A move of the blank tile.
///
/// The variant order (`Up`, `Down`, `Left`, `Right`, `None`) is the order used to
/// break ties when two moves are otherwise ranked equally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Transformation {
    /// The blank swaps with the tile above it.
    Up,
    /// The blank swaps with the tile below it.
    Down,
    /// The blank swaps with the tile to its left.
    Left,
    /// The blank swaps with the tile to its right.
    Right,
    /// No move. Always legal, changes nothing.
    None,
}

impl Transformation {
    /// The four real moves, in tie-break order.
    pub const MOVES: [Transformation; 4] = [
        Transformation::Up,
        Transformation::Down,
        Transformation::Left,
        Transformation::Right,
    ];

    /// Returns the move that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use tile_search::engine::Transformation;
    /// assert_eq!(Transformation::Up.inverse(), Transformation::Down);
    /// assert_eq!(Transformation::Left.inverse(), Transformation::Right);
    /// assert_eq!(Transformation::None.inverse(), Transformation::None);
    /// ```
    pub fn inverse(self) -> Transformation {
        match self {
            Transformation::Up => Transformation::Down,
            Transformation::Down => Transformation::Up,
            Transformation::Left => Transformation::Right,
            Transformation::Right => Transformation::Left,
            Transformation::None => Transformation::None,
        }
    }

    /// Row and column offset of the cell the blank moves into.
    fn offset(self) -> (isize, isize) {
        match self {
            Transformation::Up => (-1, 0),
            Transformation::Down => (1, 0),
            Transformation::Left => (0, -1),
            Transformation::Right => (0, 1),
            Transformation::None => (0, 0),
        }
    }

    /// Cell reached from `(r, c)` by this move, or `None` if it falls off the board.
    fn target(self, r: usize, c: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.offset();
        let nr = r as isize + dr;
        let nc = c as isize + dc;
        if nr >= 0 && nr < GRID_SIZE as isize && nc >= 0 && nc < GRID_SIZE as isize {
            Some((nr as usize, nc as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transformation::Up => "UP",
            Transformation::Down => "DOWN",
            Transformation::Left => "LEFT",
            Transformation::Right => "RIGHT",
            Transformation::None => "NONE",
        };
        f.pad(name)
    }
}

/// One immutable configuration of the puzzle board.
///
/// Besides the grid, a state remembers the move that produced it from its
/// predecessor, what that single move cost and the total cost accumulated since the
/// initial state. The cost of a move is the value of the tile the blank displaces.
///
/// Equality and hashing only look at the grid: two states reached by different
/// move sequences are the same state.
///
/// # Examples
/// ```
/// use tile_search::engine::{State, Transformation};
///
/// let state = State::from_text("1 2 3 4 0 5 6 7 8", Transformation::Down, 10).unwrap();
/// assert_eq!(state.local_cost(), 2);
/// assert_eq!(state.cumulative_cost(), 12);
///
/// let moved = state.apply(Transformation::Down).unwrap();
/// assert_eq!(moved.to_text(), "1 2 3 4 7 5 6 0 8");
/// assert_eq!(moved.cumulative_cost(), 19);
/// ```
#[derive(Clone, Debug)]
pub struct State {
    grid: Grid,
    blank: (usize, usize),
    predecessor: Transformation,
    local_cost: u32,
    cumulative_cost: u32,
    key: u32,
}

impl State {
    /// Parses a board and attaches its move-cost provenance.
    ///
    /// # Arguments
    /// * `board`: Board text, nine space-separated tile values listed row-major.
    /// * `predecessor`: The move that produced this board from its predecessor.
    /// * `base_cost`: Cumulative cost of the predecessor.
    ///
    /// # Returns
    /// * `Ok(State)` whose local cost is the value of the tile that reversing
    ///   `predecessor` would move back (`0` for `Transformation::None`), and whose
    ///   cumulative cost is `base_cost` plus that local cost.
    /// * `Err(PuzzleError::MalformedBoard)` or `Err(PuzzleError::MissingBlank)` if the
    ///   board text is invalid.
    /// * `Err(PuzzleError::IllegalMove)` if `predecessor` could not have produced this
    ///   board, i.e. its inverse would push the blank off the grid.
    /// * `Err(PuzzleError::CostOverflow)` if the cumulative cost does not fit in a `u32`.
    pub fn from_text(board: &str, predecessor: Transformation, base_cost: u32) -> Result<State> {
        let grid = grid_from_str(board)?;
        State::from_grid(grid, predecessor, base_cost)
    }

    fn from_grid(grid: Grid, predecessor: Transformation, base_cost: u32) -> Result<State> {
        let blank = find_blank(&grid).ok_or_else(|| PuzzleError::MissingBlank(grid_to_string(&grid)))?;

        let local_cost = match predecessor.inverse() {
            Transformation::None => 0,
            undo => {
                let (r, c) = undo.target(blank.0, blank.1).ok_or_else(|| PuzzleError::IllegalMove {
                    transformation: undo,
                    board: grid_to_string(&grid),
                })?;
                grid[r][c] as u32
            }
        };

        let cumulative_cost = base_cost
            .checked_add(local_cost)
            .ok_or(PuzzleError::CostOverflow {
                base: base_cost,
                step: local_cost,
            })?;

        Ok(State {
            grid,
            blank,
            predecessor,
            local_cost,
            cumulative_cost,
            key: structural_key(&grid),
        })
    }

    /// Produces a solvable board by walking `moves` random legal moves away from `goal`.
    ///
    /// The walk never immediately undoes its previous move. The same seed always
    /// produces the same board. The returned state carries no cost history: its
    /// predecessor is `Transformation::None` and its costs are zero.
    ///
    /// # Examples
    /// ```
    /// use tile_search::engine::State;
    ///
    /// let goal: State = "1 2 3 8 0 4 7 6 5".parse().unwrap();
    /// let a = State::scrambled(&goal, 20, 7);
    /// let b = State::scrambled(&goal, 20, 7);
    /// assert_eq!(a, b);
    /// assert!(a.is_solvable_from(&goal));
    /// assert_eq!(a.cumulative_cost(), 0);
    /// ```
    pub fn scrambled(goal: &State, moves: usize, seed: u64) -> State {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = goal.grid;
        let mut blank = goal.blank;
        let mut last = Transformation::None;

        for _ in 0..moves {
            let options: Vec<(Transformation, (usize, usize))> = Transformation::MOVES
                .iter()
                .filter(|&&t| t != last.inverse())
                .filter_map(|&t| t.target(blank.0, blank.1).map(|cell| (t, cell)))
                .collect();
            let (t, (r, c)) = options[rng.gen_range(0..options.len())];
            grid[blank.0][blank.1] = grid[r][c];
            grid[r][c] = BLANK;
            blank = (r, c);
            last = t;
        }

        State {
            grid,
            blank,
            predecessor: Transformation::None,
            local_cost: 0,
            cumulative_cost: 0,
            key: structural_key(&grid),
        }
    }

    /// Returns the tile value at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Row and column of the blank cell.
    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    /// The move that produced this state from its predecessor.
    pub fn predecessor(&self) -> Transformation {
        self.predecessor
    }

    /// Cost of the single move that produced this state.
    pub fn local_cost(&self) -> u32 {
        self.local_cost
    }

    /// Total cost of all moves since the initial state.
    pub fn cumulative_cost(&self) -> u32 {
        self.cumulative_cost
    }

    /// Whether `transformation` keeps the blank on the board.
    ///
    /// `Transformation::None` is always legal.
    pub fn is_legal(&self, transformation: Transformation) -> bool {
        transformation.target(self.blank.0, self.blank.1).is_some()
    }

    /// Applies a move and returns the resulting state.
    ///
    /// The blank swaps with the neighbouring tile in the direction of the move. The new
    /// state's predecessor is `transformation` and its cumulative cost is this state's
    /// cumulative cost plus the value of the displaced tile. `self` is left untouched.
    ///
    /// # Returns
    /// * `Ok(State)` for a legal move. Applying `Transformation::None` yields an equal
    ///   board with zero additional cost.
    /// * `Err(PuzzleError::IllegalMove)` if the move would push the blank off the grid.
    pub fn apply(&self, transformation: Transformation) -> Result<State> {
        let (r, c) = transformation
            .target(self.blank.0, self.blank.1)
            .ok_or_else(|| PuzzleError::IllegalMove {
                transformation,
                board: self.to_text(),
            })?;

        let mut grid = self.grid;
        grid[self.blank.0][self.blank.1] = grid[r][c];
        grid[r][c] = BLANK;
        State::from_grid(grid, transformation, self.cumulative_cost)
    }

    /// Returns every state reachable with one legal move, excluding the no-op.
    ///
    /// Corner blanks have two successors, edge blanks three and the centre four.
    /// The order of the returned states is not significant.
    pub fn successors(&self) -> Vec<State> {
        Transformation::MOVES
            .iter()
            .filter(|&&t| self.is_legal(t))
            .filter_map(|&t| self.apply(t).ok())
            .collect()
    }

    /// Evaluates this state against `goal` with the heuristic named by `policy`.
    ///
    /// # Examples
    /// ```
    /// use tile_search::engine::{State, Transformation};
    /// use tile_search::heuristics::EvaluationPolicy;
    ///
    /// let goal: State = "1 2 3 5 0 4 6 7 8".parse().unwrap();
    /// let state = State::from_text("1 2 3 4 0 5 6 7 8", Transformation::Down, 10).unwrap();
    /// assert_eq!(state.cost_to_goal(EvaluationPolicy::AstarMisplaced, &goal), 14);
    /// assert_eq!(state.cost_to_goal(EvaluationPolicy::AstarManhattan, &goal), 16);
    /// ```
    pub fn cost_to_goal(&self, policy: EvaluationPolicy, goal: &State) -> u32 {
        match policy {
            EvaluationPolicy::None => self.local_cost,
            EvaluationPolicy::CumulativeCost => self.cumulative_cost,
            EvaluationPolicy::Greedy => heuristics::misplaced_tiles(self, goal),
            EvaluationPolicy::AstarMisplaced => {
                self.cumulative_cost + heuristics::misplaced_tiles(self, goal)
            }
            EvaluationPolicy::AstarManhattan => {
                self.cumulative_cost + heuristics::manhattan_distance(self, goal)
            }
            EvaluationPolicy::AstarWeightedManhattan => {
                self.cumulative_cost + heuristics::weighted_manhattan_distance(self, goal)
            }
        }
    }

    /// Canonical board text, accepted back by `State::from_text`.
    pub fn to_text(&self) -> String {
        grid_to_string(&self.grid)
    }

    /// Orders two states by cumulative cost.
    ///
    /// Equal-cost states with different boards compare as `Ordering::Greater` (in both
    /// directions), so `Ordering::Equal` is only ever reported for equal boards. This
    /// is not a lawful `Ord` and must not drive a sort; it answers "is this state
    /// strictly cheaper than that one".
    pub fn cost_order(&self, other: &State) -> Ordering {
        match self.cumulative_cost.cmp(&other.cumulative_cost) {
            Ordering::Equal if self != other => Ordering::Greater,
            ordering => ordering,
        }
    }

    /// Whether `goal` can be reached from this board at all.
    ///
    /// On an odd-width board two configurations are connected exactly when their
    /// counts of inverted tile pairs (ignoring the blank) have the same parity.
    pub fn is_solvable_from(&self, goal: &State) -> bool {
        inversions(&self.grid) % 2 == inversions(&goal.grid) % 2
    }
}

/// Locates the blank cell.
fn find_blank(grid: &Grid) -> Option<(usize, usize)> {
    (0..CELL_COUNT)
        .map(|i| (i / GRID_SIZE, i % GRID_SIZE))
        .find(|&(r, c)| grid[r][c] == BLANK)
}

/// Base-`CELL_COUNT` encoding of the grid, unique per board.
fn structural_key(grid: &Grid) -> u32 {
    grid.iter()
        .flat_map(|row| row.iter())
        .fold(0u32, |acc, &v| acc * CELL_COUNT as u32 + v as u32)
}

fn inversions(grid: &Grid) -> usize {
    let tiles: Vec<u8> = grid
        .iter()
        .flat_map(|row| row.iter().copied())
        .filter(|&v| v != BLANK)
        .collect();
    let mut count = 0;
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i] > tiles[j] {
                count += 1;
            }
        }
    }
    count
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl FromStr for State {
    type Err = PuzzleError;

    /// Parses an initial or goal board: no predecessor move and zero cost.
    fn from_str(s: &str) -> Result<State> {
        State::from_text(s, Transformation::None, 0)
    }
}

impl fmt::Display for State {
    /// Formats the board as three rows with `_` marking the blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| if v == BLANK { "_".to_string() } else { v.to_string() })
                .collect();
            write!(f, "{}", cells.join(" "))?;
            if r < GRID_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn problem_one() -> State {
        State::from_text("1 2 3 4 0 5 6 7 8", Transformation::Down, 10).unwrap()
    }

    fn problem_two() -> State {
        State::from_text("8 7 6 5 4 3 2 1 0", Transformation::Right, 8).unwrap()
    }

    #[test]
    fn test_from_text_cost_provenance() {
        let one = problem_one();
        assert_eq!(one.predecessor(), Transformation::Down);
        assert_eq!(one.to_text(), "1 2 3 4 0 5 6 7 8");
        assert_eq!(one.local_cost(), 2);
        assert_eq!(one.cumulative_cost(), 12);

        let two = problem_two();
        assert_eq!(two.predecessor(), Transformation::Right);
        assert_eq!(two.local_cost(), 1);
        assert_eq!(two.cumulative_cost(), 9);
    }

    #[test]
    fn test_from_text_cost_overflow() {
        let result = State::from_text("1 2 3 4 0 5 6 7 8", Transformation::Down, u32::MAX);
        assert_eq!(result.unwrap_err(), PuzzleError::CostOverflow { base: u32::MAX, step: 2 });

        // No move cost, no overflow.
        let free = State::from_text("1 2 3 4 0 5 6 7 8", Transformation::None, u32::MAX).unwrap();
        assert_eq!(free.cumulative_cost(), u32::MAX);

        let near = State::from_text("1 2 3 4 0 5 6 7 8", Transformation::Down, u32::MAX - 2).unwrap();
        assert_eq!(near.cumulative_cost(), u32::MAX);
        assert!(matches!(
            near.apply(Transformation::Left),
            Err(PuzzleError::CostOverflow { base: u32::MAX, step: 4 })
        ));
    }

    #[test]
    fn test_from_text_without_predecessor_costs_nothing() {
        let state: State = "1 2 3 8 0 4 7 6 5".parse().unwrap();
        assert_eq!(state.predecessor(), Transformation::None);
        assert_eq!(state.local_cost(), 0);
        assert_eq!(state.cumulative_cost(), 0);
        assert_eq!(state.blank(), (1, 1));
    }

    #[test]
    fn test_from_text_impossible_predecessor() {
        // Blank in the top row cannot have arrived by moving DOWN.
        let result = State::from_text("1 0 3 4 2 5 6 7 8", Transformation::Down, 0);
        assert!(matches!(
            result,
            Err(PuzzleError::IllegalMove { transformation: Transformation::Up, .. })
        ));
    }

    #[test]
    fn test_from_text_missing_blank() {
        let result = State::from_text("1 2 3 4 5 6 7 8 9", Transformation::Down, 0);
        assert!(matches!(result, Err(PuzzleError::MissingBlank(_))));
    }

    #[test]
    fn test_from_text_malformed() {
        assert!(matches!(
            State::from_text("1 2 3 4 0", Transformation::None, 0),
            Err(PuzzleError::MalformedBoard(_))
        ));
    }

    #[test]
    fn test_apply_each_direction() {
        let one = problem_one();
        assert_eq!(one.apply(Transformation::Down).unwrap().to_text(), "1 2 3 4 7 5 6 0 8");
        assert_eq!(one.apply(Transformation::Up).unwrap().to_text(), "1 0 3 4 2 5 6 7 8");
        assert_eq!(one.apply(Transformation::Right).unwrap().to_text(), "1 2 3 4 5 0 6 7 8");
        assert_eq!(one.apply(Transformation::Left).unwrap().to_text(), "1 2 3 0 4 5 6 7 8");
    }

    #[test]
    fn test_apply_threads_cost() {
        let one = problem_one();
        let down = one.apply(Transformation::Down).unwrap();
        assert_eq!(down.predecessor(), Transformation::Down);
        assert_eq!(down.local_cost(), 7);
        assert_eq!(down.cumulative_cost(), 19);
    }

    #[test]
    fn test_apply_none_is_free_and_equal() {
        let one = problem_one();
        let same = one.apply(Transformation::None).unwrap();
        assert_eq!(same, one);
        assert_eq!(same.local_cost(), 0);
        assert_eq!(same.cumulative_cost(), one.cumulative_cost());
    }

    #[test]
    fn test_illegal_moves_leave_state_untouched() {
        let cases = [
            ("1 2 3 4 5 0 6 7 8", Transformation::Right),
            ("0 2 3 1 4 5 6 7 8", Transformation::Left),
            ("1 2 3 4 5 6 0 7 8", Transformation::Down),
            ("1 2 0 4 5 6 3 7 8", Transformation::Up),
        ];
        for (text, t) in cases {
            let state = State::from_text(text, Transformation::None, 0).unwrap();
            assert!(!state.is_legal(t));
            let result = state.apply(t);
            assert_eq!(
                result.unwrap_err(),
                PuzzleError::IllegalMove { transformation: t, board: text.to_string() }
            );
            assert_eq!(state.to_text(), text);
            assert_eq!(state.cumulative_cost(), 0);
        }
    }

    #[test]
    fn test_none_is_always_legal() {
        for text in ["0 1 2 3 4 5 6 7 8", "1 2 3 4 0 5 6 7 8", "1 2 3 4 5 6 7 8 0"] {
            let state: State = text.parse().unwrap();
            assert!(state.is_legal(Transformation::None));
        }
    }

    #[test]
    fn test_apply_then_inverse_restores_board() {
        let boards = ["0 1 2 3 4 5 6 7 8", "1 2 3 4 0 5 6 7 8", "1 2 3 4 5 6 7 0 8", "8 7 6 5 4 3 2 1 0"];
        for text in boards {
            let state: State = text.parse().unwrap();
            for t in Transformation::MOVES {
                if state.is_legal(t) {
                    let back = state.apply(t).unwrap().apply(t.inverse()).unwrap();
                    assert_eq!(back, state, "{} then {} from {}", t, t.inverse(), text);
                }
            }
        }
    }

    #[test]
    fn test_successors_count_by_blank_position() {
        let corner: State = "0 1 2 3 4 5 6 7 8".parse().unwrap();
        let edge: State = "1 0 2 3 4 5 6 7 8".parse().unwrap();
        let centre: State = "1 2 3 4 0 5 6 7 8".parse().unwrap();
        assert_eq!(corner.successors().len(), 2);
        assert_eq!(edge.successors().len(), 3);
        assert_eq!(centre.successors().len(), 4);

        for state in [corner, edge, centre] {
            let successors = state.successors();
            assert!(!successors.contains(&state));
            let unique: HashSet<&State> = successors.iter().collect();
            assert_eq!(unique.len(), successors.len());
        }
    }

    #[test]
    fn test_successor_costs_build_on_parent() {
        let one = problem_one();
        let successors = one.successors();
        assert_eq!(successors.len(), 4);
        for s in &successors {
            assert_eq!(s.cumulative_cost() - s.local_cost(), 12);
            assert!(s.cumulative_cost() > 12);
        }

        let two = problem_two();
        let successors = two.successors();
        assert_eq!(successors.len(), 2);
        for s in &successors {
            assert_eq!(s.cumulative_cost() - s.local_cost(), 9);
            assert!(s.cumulative_cost() > 9);
        }
    }

    #[test]
    fn test_equality_ignores_history() {
        let one = problem_one();
        let copy = State::from_text("1 2 3 4 0 5 6 7 8", Transformation::None, 0).unwrap();
        assert_eq!(one, copy);
        assert_ne!(one, problem_two());

        let mut set = HashSet::new();
        set.insert(one);
        assert!(set.contains(&copy));

        let easy: State = "1 3 4 8 6 2 7 0 5".parse().unwrap();
        let goal: State = "1 2 3 8 0 4 7 6 5".parse().unwrap();
        assert_ne!(easy, goal);
    }

    #[test]
    fn test_cost_order() {
        let one = problem_one();
        let two = problem_two();
        assert_eq!(one.cost_order(&two), Ordering::Greater);
        assert_eq!(two.cost_order(&one), Ordering::Less);
        assert_eq!(one.cost_order(&one), Ordering::Equal);

        // Same cost, different boards never collapse to Equal.
        let a: State = "1 2 3 4 0 5 6 7 8".parse().unwrap();
        let b: State = "1 2 3 8 0 4 7 6 5".parse().unwrap();
        assert_eq!(a.cost_order(&b), Ordering::Greater);
        assert_eq!(b.cost_order(&a), Ordering::Greater);
    }

    #[test]
    fn test_to_text_round_trip() {
        let one = problem_one();
        let again = State::from_text(&one.to_text(), one.predecessor(), 10).unwrap();
        assert_eq!(again.to_text(), one.to_text());
        assert_eq!(again.cumulative_cost(), one.cumulative_cost());
    }

    #[test]
    fn test_display_board_formatting() {
        let state: State = "1 2 3 8 0 4 7 6 5".parse().unwrap();
        assert_eq!(format!("{}", state), "1 2 3\n8 _ 4\n7 6 5");
    }

    #[test]
    fn test_scrambled_determinism_and_solvability() {
        let goal: State = "1 2 3 8 0 4 7 6 5".parse().unwrap();
        let a = State::scrambled(&goal, 30, 514514);
        let b = State::scrambled(&goal, 30, 514514);
        assert_eq!(a, b);
        assert!(a.is_solvable_from(&goal));
        assert_eq!(a.predecessor(), Transformation::None);

        let zero = State::scrambled(&goal, 0, 1);
        assert_eq!(zero, goal);
    }

    #[test]
    fn test_is_solvable_from() {
        let goal: State = "1 2 3 8 0 4 7 6 5".parse().unwrap();
        for text in ["1 3 4 8 6 2 7 0 5", "2 8 1 0 4 3 7 6 5", "5 6 7 4 0 8 3 2 1"] {
            let state: State = text.parse().unwrap();
            assert!(state.is_solvable_from(&goal), "{}", text);
        }
        // Swapping two tiles flips the parity.
        let swapped: State = "2 1 3 8 0 4 7 6 5".parse().unwrap();
        assert!(!swapped.is_solvable_from(&goal));
    }

    #[test]
    fn test_transformation_display() {
        assert_eq!(Transformation::Up.to_string(), "UP");
        assert_eq!(format!("{:>6}", Transformation::Left), "  LEFT");
    }
}
