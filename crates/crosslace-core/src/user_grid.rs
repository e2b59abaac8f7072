//! Player-entered letters, kept as immutable snapshots.

use std::fmt::{self, Display};

use crate::{Grid, OutOfBoundsError, Position};

/// The letters a player has entered, parallel to a [`Grid`].
///
/// A `UserGrid` is a value snapshot: entering or erasing a letter returns a
/// new grid instead of mutating in place, so observers holding an older
/// snapshot never see it change underneath them.
///
/// The engine's letter convention is uppercase; [`UserGrid::with_letter`]
/// uppercases on entry so comparisons against the generated grid are
/// case-insensitive from the player's point of view.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Position, UserGrid};
///
/// let empty = UserGrid::empty(8);
/// let filled = empty.with_letter(Position::new(3, 2), 'к').unwrap();
///
/// assert_eq!(empty.letter(Position::new(3, 2)), None);
/// assert_eq!(filled.letter(Position::new(3, 2)), Some('К'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGrid {
    size: u8,
    letters: Vec<Option<char>>,
}

impl UserGrid {
    /// Creates an empty `size`x`size` user grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    #[must_use]
    pub fn empty(size: u8) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        let letters = vec![None; usize::from(size) * usize::from(size)];
        Self { size, letters }
    }

    /// Creates a user grid filled with the letters of every open cell of
    /// `grid` (a solved state). Intended for tests and hint features.
    #[must_use]
    pub fn solved_from(grid: &Grid) -> Self {
        let mut this = Self::empty(grid.size());
        for pos in grid.open_positions() {
            let idx = this.index_of(pos);
            this.letters[idx] = grid[pos].letter();
        }
        this
    }

    /// Returns the grid dimension.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the letter entered at `pos`, or `None` if the cell is empty
    /// or out of bounds.
    #[must_use]
    pub fn letter(&self, pos: Position) -> Option<char> {
        (pos.row < self.size && pos.col < self.size)
            .then(|| self.letters[self.index_of(pos)])
            .flatten()
    }

    /// Returns a new snapshot with `letter` (uppercased) entered at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if `pos` lies outside the grid.
    pub fn with_letter(&self, pos: Position, letter: char) -> Result<Self, OutOfBoundsError> {
        let letter = letter.to_uppercase().next().unwrap_or(letter);
        self.with_entry(pos, Some(letter))
    }

    /// Returns a new snapshot with the entry at `pos` erased.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if `pos` lies outside the grid.
    pub fn with_cleared(&self, pos: Position) -> Result<Self, OutOfBoundsError> {
        self.with_entry(pos, None)
    }

    /// Returns `true` if no letters have been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.iter().all(Option::is_none)
    }

    fn with_entry(&self, pos: Position, entry: Option<char>) -> Result<Self, OutOfBoundsError> {
        if pos.row >= self.size || pos.col >= self.size {
            return Err(OutOfBoundsError {
                pos,
                size: self.size,
            });
        }
        let mut next = self.clone();
        let idx = next.index_of(pos);
        next.letters[idx] = entry;
        Ok(next)
    }

    #[inline]
    fn index_of(&self, pos: Position) -> usize {
        usize::from(pos.row) * usize::from(self.size) + usize::from(pos.col)
    }
}

/// Renders entries one row per line, `.` for empty cells.
impl Display for UserGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self.letter(Position::new(row, col)) {
                    Some(letter) => write!(f, "{letter}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
