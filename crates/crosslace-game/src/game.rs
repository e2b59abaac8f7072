//! A crossword game session.

use crosslace_core::{Grid, OutOfBoundsError, Position, UserGrid};
use crosslace_generator::{GeneratedPuzzle, PlacedWord};

use crate::checker;

/// Errors from player input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The targeted cell is a black square.
    #[display("cell {pos} is blocked and takes no letters")]
    BlockedCell {
        /// The targeted position.
        pos: Position,
    },
    /// The targeted position lies outside the grid.
    #[display("{_0}")]
    #[from]
    OutOfBounds(OutOfBoundsError),
}

/// A crossword game session.
///
/// Owns the generated puzzle and the player's entries. Entries live in a
/// [`UserGrid`] value snapshot; every accepted input swaps in a new
/// snapshot, so a snapshot handed out earlier never changes underneath its
/// holder.
///
/// # Examples
///
/// ```
/// use crosslace_core::Position;
/// use crosslace_game::Game;
/// use crosslace_generator::{CandidateWord, Difficulty, PlacementEngine};
///
/// let words = ["КОТ"].map(|w| CandidateWord::new(w, "", Difficulty::Easy, "ru").unwrap());
/// let puzzle = PlacementEngine::new(8).generate(&words);
/// let mut game = Game::new(puzzle);
///
/// game.enter_letter(Position::new(3, 2), 'к').unwrap();
/// assert!(!game.is_solved());
/// assert_eq!(game.score(), 33);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: GeneratedPuzzle,
    entries: UserGrid,
}

impl Game {
    /// Starts a session over a generated puzzle with no entries.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let entries = UserGrid::empty(puzzle.grid.size());
        Self { puzzle, entries }
    }

    /// The solution grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    /// The placed words with their clues and numbers.
    #[must_use]
    pub fn words(&self) -> &[PlacedWord] {
        &self.puzzle.words
    }

    /// The current snapshot of the player's entries.
    #[must_use]
    pub fn entries(&self) -> &UserGrid {
        &self.entries
    }

    /// Enters `letter` (uppercased) at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` lies outside the grid and
    /// [`GameError::BlockedCell`] if it targets a black square.
    pub fn enter_letter(&mut self, pos: Position, letter: char) -> Result<(), GameError> {
        self.check_open(pos)?;
        self.entries = self.entries.with_letter(pos, letter)?;
        Ok(())
    }

    /// Erases the entry at `pos`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Game::enter_letter`].
    pub fn erase(&mut self, pos: Position) -> Result<(), GameError> {
        self.check_open(pos)?;
        self.entries = self.entries.with_cleared(pos)?;
        Ok(())
    }

    /// Erases all entries.
    pub fn reset(&mut self) {
        self.entries = UserGrid::empty(self.puzzle.grid.size());
    }

    /// Returns `true` iff every open cell has the correct letter entered.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        checker::check_solution(&self.entries, &self.puzzle.grid)
    }

    /// Percentage of open cells correctly filled, 0-100.
    #[must_use]
    pub fn score(&self) -> u8 {
        checker::score(&self.entries, &self.puzzle.grid)
    }

    fn check_open(&self, pos: Position) -> Result<(), GameError> {
        match self.puzzle.grid.get(pos) {
            None => Err(GameError::OutOfBounds(OutOfBoundsError {
                pos,
                size: self.puzzle.grid.size(),
            })),
            Some(cell) if cell.is_blocked() => Err(GameError::BlockedCell { pos }),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crosslace_generator::{CandidateWord, Difficulty, PlacementEngine};

    use super::*;

    fn new_game(texts: &[&str]) -> Game {
        let candidates: Vec<_> = texts
            .iter()
            .map(|text| CandidateWord::new(*text, "", Difficulty::Easy, "ru").unwrap())
            .collect();
        Game::new(PlacementEngine::new(8).generate(&candidates))
    }

    #[test]
    fn test_filling_every_cell_solves_the_game() {
        let mut game = new_game(&["КОТ", "ДОМ"]);
        let positions: Vec<_> = game.grid().open_positions().collect();
        for pos in positions {
            let letter = game.grid()[pos].letter().unwrap();
            game.enter_letter(pos, letter).unwrap();
        }
        assert!(game.is_solved());
        assert_eq!(game.score(), 100);
    }

    #[test]
    fn test_blocked_cell_rejects_input() {
        let mut game = new_game(&["КОТ"]);
        let err = game.enter_letter(Position::new(0, 0), 'А').unwrap_err();
        assert_eq!(err, GameError::BlockedCell {
            pos: Position::new(0, 0),
        });
    }

    #[test]
    fn test_out_of_bounds_rejects_input() {
        let mut game = new_game(&["КОТ"]);
        let err = game.enter_letter(Position::new(8, 0), 'А').unwrap_err();
        assert!(matches!(err, GameError::OutOfBounds(_)));
    }

    #[test]
    fn test_erase_and_reset() {
        let mut game = new_game(&["КОТ"]);
        let pos = Position::new(3, 2);
        game.enter_letter(pos, 'К').unwrap();
        assert_eq!(game.entries().letter(pos), Some('К'));

        game.erase(pos).unwrap();
        assert_eq!(game.entries().letter(pos), None);

        game.enter_letter(pos, 'К').unwrap();
        game.reset();
        assert!(game.entries().is_empty());
    }

    #[test]
    fn test_old_snapshots_are_unaffected_by_input() {
        let mut game = new_game(&["КОТ"]);
        let before = game.entries().clone();
        game.enter_letter(Position::new(3, 2), 'К').unwrap();
        assert!(before.is_empty());
        assert!(!game.entries().is_empty());
    }
}
