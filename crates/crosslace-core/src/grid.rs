//! The crossword grid: a square matrix of cells.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, Position};

/// Error for grid operations addressing a cell outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("position {pos} is outside a {size}x{size} grid")]
pub struct OutOfBoundsError {
    /// The offending position.
    pub pos: Position,
    /// The grid dimension.
    pub size: u8,
}

/// Error returned when parsing a grid from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input contained no cells.
    #[display("grid string is empty")]
    Empty,
    /// Row lengths disagree with the row count.
    #[display("grid is not square: {rows} rows but row {bad_row} has {cols} cells")]
    NotSquare {
        /// Number of rows found.
        rows: usize,
        /// Index of the first row with a mismatched length.
        bad_row: usize,
        /// Length of that row.
        cols: usize,
    },
    /// The grid dimension does not fit the supported size range.
    #[display("grid dimension {rows} exceeds the supported maximum of 255")]
    TooLarge {
        /// Number of rows found.
        rows: usize,
    },
}

/// A square crossword grid.
///
/// All cells start [`Cell::Blocked`]; the placement engine opens cells as it
/// commits words. A grid is a plain value: cloning it yields an independent
/// snapshot, which is how callers are expected to observe state changes.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Cell, Grid, Position};
///
/// let mut grid = Grid::blocked(8);
/// assert_eq!(grid.size(), 8);
/// assert_eq!(grid.open_count(), 0);
///
/// grid.open_with(Position::new(3, 2), 'К');
/// assert_eq!(grid[Position::new(3, 2)].letter(), Some('К'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a fully blocked `size`x`size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    #[must_use]
    pub fn blocked(size: u8) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        let cells = vec![Cell::Blocked; usize::from(size) * usize::from(size)];
        Self { size, cells }
    }

    /// Returns the grid dimension.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns `true` if `pos` lies within the grid.
    #[must_use]
    #[inline]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Returns the cell at `pos`, or `None` if `pos` is out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.cells[self.index_of(pos)])
    }

    /// Opens the cell at `pos` with `letter`, preserving any clue number
    /// already recorded there.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn open_with(&mut self, pos: Position, letter: char) {
        let idx = self.checked_index(pos);
        let number = self.cells[idx].number();
        self.cells[idx] = Cell::Open { letter, number };
    }

    /// Records a clue number on the open cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds or the cell is blocked; numbering a
    /// cell no word covers is a programmer error.
    pub fn number_cell(&mut self, pos: Position, number: u8) {
        let idx = self.checked_index(pos);
        match &mut self.cells[idx] {
            Cell::Blocked => panic!("cannot number blocked cell at {pos}"),
            Cell::Open { number: slot, .. } => *slot = Some(number),
        }
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Iterates over the positions of all open cells, in row-major order.
    pub fn open_positions(&self) -> impl Iterator<Item = Position> {
        self.positions().filter(|&pos| !self[pos].is_blocked())
    }

    /// Returns the number of open cells.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_blocked()).count()
    }

    #[inline]
    fn index_of(&self, pos: Position) -> usize {
        usize::from(pos.row) * usize::from(self.size) + usize::from(pos.col)
    }

    #[inline]
    fn checked_index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} is outside a {size}x{size} grid",
            size = self.size,
        );
        self.index_of(pos)
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, pos: Position) -> &Cell {
        let idx = self.checked_index(pos);
        &self.cells[idx]
    }
}

/// Renders the grid one row per line, `#` for blocked cells and the letter
/// for open cells. Clue numbers are not rendered.
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self[Position::new(row, col)].letter() {
                    Some(letter) => write!(f, "{letter}")?,
                    None => write!(f, "#")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses a grid from the same shape [`Display`] renders: one row per line,
/// `#` (or `.`) for blocked cells, any other character as an open letter.
/// Blank lines and leading/trailing whitespace per line are ignored.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Grid, Position};
///
/// let grid: Grid = "
///     ####
///     КОТ
///     ####
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid[Position::new(1, 0)].letter(), Some('К'));
/// ```
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        if rows.is_empty() {
            return Err(ParseGridError::Empty);
        }
        let Ok(size) = u8::try_from(rows.len()) else {
            return Err(ParseGridError::TooLarge { rows: rows.len() });
        };
        if let Some((bad_row, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != rows.len())
        {
            return Err(ParseGridError::NotSquare {
                rows: rows.len(),
                bad_row,
                cols: row.len(),
            });
        }

        let mut grid = Self::blocked(size);
        for (r, row) in rows.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                if ch != '#' && ch != '.' {
                    #[expect(clippy::cast_possible_truncation)]
                    grid.open_with(Position::new(r as u8, c as u8), ch);
                }
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_grid_has_no_open_cells() {
        let grid = Grid::blocked(8);
        assert_eq!(grid.open_count(), 0);
        assert_eq!(grid.open_positions().count(), 0);
        assert_eq!(grid.positions().count(), 64);
    }

    #[test]
    #[should_panic(expected = "grid size must be at least 1")]
    fn test_zero_size_panics() {
        let _ = Grid::blocked(0);
    }

    #[test]
    fn test_open_with_preserves_number() {
        let mut grid = Grid::blocked(4);
        let pos = Position::new(1, 1);
        grid.open_with(pos, 'A');
        grid.number_cell(pos, 1);
        grid.open_with(pos, 'B');
        assert_eq!(grid[pos].letter(), Some('B'));
        assert_eq!(grid[pos].number(), Some(1));
    }

    #[test]
    #[should_panic(expected = "cannot number blocked cell")]
    fn test_numbering_blocked_cell_panics() {
        let mut grid = Grid::blocked(4);
        grid.number_cell(Position::new(0, 0), 1);
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let grid = Grid::blocked(4);
        assert_eq!(grid.get(Position::new(4, 0)), None);
        assert_eq!(grid.get(Position::new(0, 4)), None);
        assert!(grid.get(Position::new(3, 3)).is_some());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let mut grid = Grid::blocked(3);
        grid.open_with(Position::new(1, 0), 'К');
        grid.open_with(Position::new(1, 1), 'О');
        grid.open_with(Position::new(1, 2), 'Т');
        let parsed: Grid = grid.to_string().parse().unwrap();
        assert_eq!(parsed, grid);
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        fn grid_strategy() -> impl Strategy<Value = Grid> {
            (2_u8..=10).prop_flat_map(|size| {
                let cells = usize::from(size) * usize::from(size);
                prop::collection::vec(prop::option::of(prop::sample::select(vec!['А', 'Б', 'В'])), cells)
                    .prop_map(move |letters| {
                        let mut grid = Grid::blocked(size);
                        for (pos, letter) in grid.positions().zip(letters).collect::<Vec<_>>() {
                            if let Some(letter) = letter {
                                grid.open_with(pos, letter);
                            }
                        }
                        grid
                    })
            })
        }

        proptest! {
            #[test]
            fn display_round_trips_through_from_str(grid in grid_strategy()) {
                let parsed: Grid = grid.to_string().parse().unwrap();
                prop_assert_eq!(parsed, grid);
            }

            #[test]
            fn open_count_matches_open_positions(grid in grid_strategy()) {
                prop_assert_eq!(grid.open_count(), grid.open_positions().count());
            }
        }
    }

    #[test]
    fn test_from_str_rejects_ragged_input() {
        let err = "##\n###".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            ParseGridError::NotSquare {
                rows: 2,
                bad_row: 1,
                cols: 3,
            }
        );
        assert_eq!("".parse::<Grid>().unwrap_err(), ParseGridError::Empty);
    }
}
