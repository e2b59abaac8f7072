//! Core data structures for crossword applications.
//!
//! This crate provides the leaf types shared by the generator and game
//! crates:
//!
//! - [`position`]: grid coordinates ([`Position`]) and word reading
//!   direction ([`Orientation`])
//! - [`cell`]: a single grid cell ([`Cell`]), blocked or open with a letter
//!   and optional clue number
//! - [`grid`]: the square cell matrix ([`Grid`]) with string parsing and
//!   rendering for tests and diagnostics
//! - [`user_grid`]: player-entered letters ([`UserGrid`]) kept as immutable
//!   value snapshots
//!
//! # Examples
//!
//! ```
//! use crosslace_core::{Grid, Position, UserGrid};
//!
//! let grid: Grid = "
//!     #####
//!     #КОТ
//!     #####
//!     #####
//! "
//! .parse()
//! .unwrap();
//!
//! let user = UserGrid::empty(grid.size())
//!     .with_letter(Position::new(1, 1), 'к')
//!     .unwrap();
//! assert_eq!(user.letter(Position::new(1, 1)), Some('К'));
//! ```

pub mod cell;
pub mod grid;
pub mod position;
pub mod user_grid;

pub use self::{
    cell::Cell,
    grid::{Grid, OutOfBoundsError, ParseGridError},
    position::{Orientation, Position},
    user_grid::UserGrid,
};
