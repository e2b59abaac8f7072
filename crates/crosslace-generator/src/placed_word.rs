//! Words committed to the grid.

use crosslace_core::{Orientation, Position};

/// A word committed to the grid by the placement engine.
///
/// Placed words are immutable: once committed they are never moved or
/// removed within a generation run. The clue number is assigned by the
/// numbering pass after all words are placed.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Orientation, Position};
/// use crosslace_generator::PlacedWord;
///
/// let word = PlacedWord::new("КОТ", "Домашний питомец", Position::new(3, 2), Orientation::Across);
/// let cells: Vec<_> = word.positions().collect();
/// assert_eq!(cells, [
///     Position::new(3, 2),
///     Position::new(3, 3),
///     Position::new(3, 4),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    text: String,
    clue: String,
    start: Position,
    orientation: Orientation,
    number: Option<u8>,
}

impl PlacedWord {
    /// Creates a placed word with no clue number assigned yet.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        clue: impl Into<String>,
        start: Position,
        orientation: Orientation,
    ) -> Self {
        Self {
            text: text.into(),
            clue: clue.into(),
            start,
            orientation,
            number: None,
        }
    }

    /// The uppercase word text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The clue shown to the player.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// The grid cell holding the word's first letter.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// The word's reading direction.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The clue number, once the numbering pass has run.
    #[must_use]
    pub const fn number(&self) -> Option<u8> {
        self.number
    }

    /// Records the clue number. Used by the numbering pass.
    pub(crate) const fn set_number(&mut self, number: u8) {
        self.number = Some(number);
    }

    /// Word length in letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the word has no letters; never the case for words
    /// produced by the engine.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterates over the grid position of every letter, in reading order.
    ///
    /// Positions past the coordinate range are silently cut off; engine
    /// output always lies fully in bounds (the validity check guarantees it).
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let start = self.start;
        let orientation = self.orientation;
        (0..self.len())
            .map_while(move |i| u8::try_from(i).ok().and_then(|i| start.step(orientation, i)))
    }

    /// Iterates over `(position, letter)` pairs, in reading order.
    pub fn letters(&self) -> impl Iterator<Item = (Position, char)> {
        self.positions().zip(self.text.chars())
    }
}
