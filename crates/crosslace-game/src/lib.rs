//! Crossword game sessions and solution checking.
//!
//! This crate sits on top of the generator: it owns a generated puzzle,
//! validates player input, and answers "is it solved" and "how much of it
//! is correct".
//!
//! - [`game`]: the [`Game`] session (puzzle + entry snapshots)
//! - [`checker`]: standalone [`check_solution`] and [`score`] functions for
//!   callers that manage their own [`UserGrid`]
//!
//! [`UserGrid`]: crosslace_core::UserGrid
//!
//! # Examples
//!
//! ```
//! use crosslace_game::Game;
//! use crosslace_generator::{BuiltinWordPool, Difficulty, PlacementEngine, generate_with_seed};
//!
//! let pool = BuiltinWordPool::new();
//! let engine = PlacementEngine::new(PlacementEngine::DEFAULT_SIZE);
//! let puzzle = generate_with_seed(&pool, &engine, Difficulty::Easy, "ru", 42);
//!
//! let game = Game::new(puzzle);
//! assert!(!game.is_solved()); // nothing entered yet
//! assert_eq!(game.score(), 0);
//! ```

pub mod checker;
pub mod game;

pub use self::{
    checker::{check_solution, score},
    game::{Game, GameError},
};
