//! A single crossword grid cell.

/// One cell of a crossword grid.
///
/// A cell is either blocked (a "black square", part of no word) or open with
/// exactly one letter and an optional clue number. Representing the two states
/// as enum variants makes the invariant "a blocked cell never holds a letter
/// or number" impossible to violate.
///
/// # Examples
///
/// ```
/// use crosslace_core::Cell;
///
/// let cell = Cell::open('К');
/// assert_eq!(cell.letter(), Some('К'));
/// assert_eq!(cell.number(), None);
/// assert!(!cell.is_blocked());
///
/// assert!(Cell::Blocked.is_blocked());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// A black square; part of no word.
    #[default]
    Blocked,
    /// A cell covered by at least one placed word.
    Open {
        /// The letter all words crossing this cell agree on.
        letter: char,
        /// Clue number, present only on cells where a word starts.
        number: Option<u8>,
    },
}

impl Cell {
    /// Creates an open cell holding `letter` and no clue number.
    #[must_use]
    #[inline]
    pub const fn open(letter: char) -> Self {
        Self::Open {
            letter,
            number: None,
        }
    }

    /// Returns `true` if this cell is a black square.
    #[must_use]
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Returns the cell's letter, or `None` for a blocked cell.
    #[must_use]
    #[inline]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Blocked => None,
            Self::Open { letter, .. } => Some(letter),
        }
    }

    /// Returns the cell's clue number, or `None` if no word starts here
    /// (or the cell is blocked).
    #[must_use]
    #[inline]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Blocked => None,
            Self::Open { number, .. } => number,
        }
    }
}
