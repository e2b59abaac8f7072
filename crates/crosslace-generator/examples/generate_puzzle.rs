//! Example demonstrating crossword generation.
//!
//! Generates a puzzle from the built-in word pool and prints the grid and
//! clue list.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty and seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --seed 42
//! ```
//!
//! Change the grid dimension:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 10
//! ```

use clap::Parser;
use crosslace_core::Orientation;
use crosslace_generator::{BuiltinWordPool, Difficulty, PlacementEngine, generate_with_seed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle difficulty (easy, medium, hard).
    #[arg(long, value_name = "DIFFICULTY", default_value = "easy")]
    difficulty: Difficulty,

    /// Word selection seed; the same seed reproduces the same puzzle.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,

    /// Grid dimension.
    #[arg(long, value_name = "SIZE", default_value_t = PlacementEngine::DEFAULT_SIZE)]
    size: u8,

    /// Word list language tag.
    #[arg(long, value_name = "LANG", default_value = "ru")]
    language: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let pool = BuiltinWordPool::new();
    let engine = PlacementEngine::new(args.size);
    let puzzle = generate_with_seed(&pool, &engine, args.difficulty, &args.language, args.seed);

    println!("{}", puzzle.grid);
    for orientation in Orientation::ALL {
        println!("{orientation}:");
        for word in puzzle
            .words
            .iter()
            .filter(|word| word.orientation() == orientation)
        {
            let number = word.number().unwrap_or(0);
            println!("  {number}. {}: {}", word.text(), word.clue());
        }
    }
}
