//! Grid coordinates and word orientation.

use std::fmt::{self, Display};

/// A position on a crossword grid, in row-major coordinates.
///
/// Rows grow downward, columns grow to the right, both starting at 0 in the
/// top-left corner. A `Position` carries no grid size; bounds are checked by
/// the grid that is being indexed.
///
/// # Examples
///
/// ```
/// use crosslace_core::Position;
///
/// let pos = Position::new(3, 2);
/// assert_eq!(pos.row, 3);
/// assert_eq!(pos.col, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index (0-based, top to bottom).
    pub row: u8,
    /// Column index (0-based, left to right).
    pub col: u8,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the position `steps` cells further along `orientation`, or
    /// `None` on coordinate overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosslace_core::{Orientation, Position};
    ///
    /// let start = Position::new(3, 2);
    /// assert_eq!(start.step(Orientation::Across, 2), Some(Position::new(3, 4)));
    /// assert_eq!(start.step(Orientation::Down, 1), Some(Position::new(4, 2)));
    /// ```
    #[must_use]
    #[inline]
    pub fn step(self, orientation: Orientation, steps: u8) -> Option<Self> {
        match orientation {
            Orientation::Across => self.col.checked_add(steps).map(|col| Self { col, ..self }),
            Orientation::Down => self.row.checked_add(steps).map(|row| Self { row, ..self }),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The reading direction of a placed word.
///
/// Successive letters of an `Across` word advance the column; letters of a
/// `Down` word advance the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left-to-right, advancing the column.
    Across,
    /// Top-to-bottom, advancing the row.
    Down,
}

impl Orientation {
    /// Both orientations, in across-then-down order.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosslace_core::Orientation;
    ///
    /// assert_eq!(Orientation::Across.perpendicular(), Orientation::Down);
    /// assert_eq!(Orientation::Down.perpendicular(), Orientation::Across);
    /// ```
    #[must_use]
    #[inline]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Unit step of this orientation as a `(row, col)` delta.
    #[must_use]
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}
