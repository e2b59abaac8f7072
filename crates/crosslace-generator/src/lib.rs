//! Crossword puzzle generation.
//!
//! This crate turns an ordered list of candidate words into a populated,
//! numbered crossword grid:
//!
//! - [`candidate`]: input words ([`CandidateWord`], [`Difficulty`])
//! - [`placed_word`]: words committed to the grid ([`PlacedWord`])
//! - [`engine`]: the greedy placement engine ([`PlacementEngine`]), the
//!   placement validity rules, and the clue numbering pass
//!   ([`assign_numbers`])
//! - [`word_pool`]: the word-supply collaborator ([`WordPool`],
//!   [`BuiltinWordPool`]) with seedable randomized selection
//!
//! Placement is deterministic: given the same candidate list and grid size,
//! [`PlacementEngine::generate`] always produces the same puzzle. All
//! randomness lives in word selection, which takes an explicit RNG.
//!
//! # Examples
//!
//! ```
//! use crosslace_generator::{BuiltinWordPool, Difficulty, PlacementEngine, generate_with_seed};
//!
//! let pool = BuiltinWordPool::new();
//! let engine = PlacementEngine::new(PlacementEngine::DEFAULT_SIZE);
//! let puzzle = generate_with_seed(&pool, &engine, Difficulty::Easy, "ru", 42);
//!
//! for word in &puzzle.words {
//!     println!("{}. {} ({})", word.number().unwrap(), word.text(), word.clue());
//! }
//! println!("{}", puzzle.grid);
//! ```

pub mod candidate;
pub mod engine;
pub mod placed_word;
pub mod word_pool;

pub use self::{
    candidate::{CandidateWord, Difficulty, ParseDifficultyError, WordError},
    engine::{GeneratedPuzzle, PlacementEngine, assign_numbers},
    placed_word::PlacedWord,
    word_pool::{BuiltinWordPool, WordPool, generate_with_seed},
};
