use crate::engine::{Grid, BLANK, CELL_COUNT, GRID_SIZE};
use crate::errors::{PuzzleError, Result};

/// Parses a board string into a `Grid`.
///
/// The string lists the cells row-major as integers separated by single
/// spaces, e.g. `"1 2 3 8 0 4 7 6 5"`. `0` is the blank tile.
///
/// Validation happens in this order:
/// - exactly `CELL_COUNT` tokens, otherwise `PuzzleError::MalformedBoard`;
/// - every token is an unsigned integer, otherwise `PuzzleError::MalformedBoard`;
/// - a blank tile is present, otherwise `PuzzleError::MissingBlank`;
/// - every value is below `CELL_COUNT` and appears once, otherwise
///   `PuzzleError::MalformedBoard`.
///
/// # Arguments
/// * `s`: The board text.
///
/// # Returns
/// * `Ok(Grid)` if parsing is successful.
/// * `Err(PuzzleError)` describing the first problem found.
///
/// # Examples
/// ```
/// use tile_search::utils::grid_from_str;
/// use tile_search::errors::PuzzleError;
///
/// let grid = grid_from_str("1 2 3 8 0 4 7 6 5").unwrap();
/// assert_eq!(grid[1][1], 0);
/// assert_eq!(grid[2][0], 7);
///
/// assert!(matches!(grid_from_str("1 2 3"), Err(PuzzleError::MalformedBoard(_))));
/// assert!(matches!(
///     grid_from_str("1 2 3 4 5 6 7 8 9"),
///     Err(PuzzleError::MissingBlank(_))
/// ));
/// ```
pub fn grid_from_str(s: &str) -> Result<Grid> {
    let tokens: Vec<&str> = s.split(' ').collect();
    if tokens.len() != CELL_COUNT {
        return Err(PuzzleError::MalformedBoard(format!(
            "expected {} tokens, found {} in '{}'",
            CELL_COUNT,
            tokens.len(),
            s
        )));
    }

    let mut values = [0u8; CELL_COUNT];
    for (i, token) in tokens.iter().enumerate() {
        values[i] = token.parse::<u8>().map_err(|_| {
            PuzzleError::MalformedBoard(format!("token '{}' at cell {} is not a tile value", token, i))
        })?;
    }

    if !values.contains(&BLANK) {
        return Err(PuzzleError::MissingBlank(s.to_string()));
    }

    let mut seen = [false; CELL_COUNT];
    for (i, &value) in values.iter().enumerate() {
        let slot = seen.get_mut(value as usize).ok_or_else(|| {
            PuzzleError::MalformedBoard(format!(
                "tile {} at cell {} is out of range 0..{}",
                value, i, CELL_COUNT
            ))
        })?;
        if *slot {
            return Err(PuzzleError::MalformedBoard(format!(
                "tile {} appears more than once in '{}'",
                value, s
            )));
        }
        *slot = true;
    }

    let mut grid = [[BLANK; GRID_SIZE]; GRID_SIZE];
    for (i, &value) in values.iter().enumerate() {
        grid[i / GRID_SIZE][i % GRID_SIZE] = value;
    }
    Ok(grid)
}

/// Serializes a `Grid` into the canonical board string accepted by `grid_from_str`.
pub fn grid_to_string(grid: &Grid) -> String {
    grid.iter()
        .flat_map(|row| row.iter())
        .map(|value| value.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}
