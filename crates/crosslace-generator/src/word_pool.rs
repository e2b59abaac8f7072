//! The word-supply collaborator: randomized, seedable candidate selection.
//!
//! Word selection is the only nondeterministic step of puzzle generation and
//! it lives entirely outside the placement engine: a pool resolves a
//! candidate list first, then the engine places it deterministically. Seeding
//! the RNG reproduces a puzzle exactly.

use rand::{Rng, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{CandidateWord, Difficulty, GeneratedPuzzle, PlacementEngine};

/// A supplier of candidate words.
///
/// The returned order is the placement priority; randomized order is fine
/// (and what [`BuiltinWordPool`] produces). Implementations backed by a
/// database or network must resolve the list fully before generation runs.
pub trait WordPool {
    /// Returns candidates for one puzzle of the given difficulty and
    /// language, in placement-priority order.
    fn words_for(
        &self,
        difficulty: Difficulty,
        language: &str,
        rng: &mut dyn Rng,
    ) -> Vec<CandidateWord>;
}

/// An in-memory word pool seeded with the game's built-in word list.
///
/// Selection filters by difficulty, language, and the difficulty's maximum
/// word length, shuffles, and takes up to the difficulty's
/// [word limit](Difficulty::word_limit).
///
/// # Examples
///
/// ```
/// use crosslace_generator::{BuiltinWordPool, Difficulty, WordPool as _};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let pool = BuiltinWordPool::new();
/// let mut rng = Pcg64::seed_from_u64(7);
/// let words = pool.words_for(Difficulty::Easy, "ru", &mut rng);
/// assert!(!words.is_empty());
/// assert!(words.iter().all(|w| w.difficulty() == Difficulty::Easy));
/// ```
#[derive(Debug, Clone)]
pub struct BuiltinWordPool {
    entries: Vec<CandidateWord>,
}

impl BuiltinWordPool {
    /// Creates a pool holding the built-in Russian word list.
    #[must_use]
    pub fn new() -> Self {
        let entries = DEFAULT_WORDS
            .iter()
            .map(|&(text, clue, difficulty)| {
                CandidateWord::new(text, clue, difficulty, "ru")
                    .unwrap_or_else(|err| unreachable!("built-in word invalid: {err}"))
            })
            .collect();
        Self { entries }
    }

    /// Creates a pool from custom entries.
    #[must_use]
    pub fn from_entries(entries: Vec<CandidateWord>) -> Self {
        Self { entries }
    }

    /// All entries, unfiltered.
    #[must_use]
    pub fn entries(&self) -> &[CandidateWord] {
        &self.entries
    }
}

impl Default for BuiltinWordPool {
    fn default() -> Self {
        Self::new()
    }
}

impl WordPool for BuiltinWordPool {
    fn words_for(
        &self,
        difficulty: Difficulty,
        language: &str,
        rng: &mut dyn Rng,
    ) -> Vec<CandidateWord> {
        let mut selected: Vec<CandidateWord> = self
            .entries
            .iter()
            .filter(|word| word.difficulty() == difficulty)
            .filter(|word| word.language() == language)
            .filter(|word| word.len() <= difficulty.max_word_length())
            .cloned()
            .collect();
        selected.shuffle(rng);
        selected.truncate(difficulty.word_limit());
        selected
    }
}

/// Selects words from `pool` with a seeded RNG and places them with
/// `engine`. The same seed always reproduces the same puzzle.
///
/// # Examples
///
/// ```
/// use crosslace_generator::{BuiltinWordPool, Difficulty, PlacementEngine, generate_with_seed};
///
/// let pool = BuiltinWordPool::new();
/// let engine = PlacementEngine::new(PlacementEngine::DEFAULT_SIZE);
/// let a = generate_with_seed(&pool, &engine, Difficulty::Easy, "ru", 42);
/// let b = generate_with_seed(&pool, &engine, Difficulty::Easy, "ru", 42);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn generate_with_seed(
    pool: &dyn WordPool,
    engine: &PlacementEngine,
    difficulty: Difficulty,
    language: &str,
    seed: u64,
) -> GeneratedPuzzle {
    let mut rng = Pcg64::seed_from_u64(seed);
    let candidates = pool.words_for(difficulty, language, &mut rng);
    engine.generate(&candidates)
}

/// The original game's built-in word table.
const DEFAULT_WORDS: &[(&str, &str, Difficulty)] = &[
    ("КОТ", "Домашний питомец", Difficulty::Easy),
    ("ДОМ", "Место жительства", Difficulty::Easy),
    ("КОД", "Набор символов", Difficulty::Easy),
    ("ТОМ", "Имя или том книги", Difficulty::Easy),
    ("РОТ", "Часть лица", Difficulty::Easy),
    ("СОК", "Напиток из фруктов", Difficulty::Easy),
    ("РЕПА", "Овощ", Difficulty::Easy),
    ("НОС", "Орган обоняния", Difficulty::Medium),
    ("ОСА", "Летающее насекомое", Difficulty::Medium),
    ("РЕКА", "Водный поток", Difficulty::Medium),
    ("ЛЕС", "Много деревьев", Difficulty::Medium),
    ("МОРЕ", "Большой водоем", Difficulty::Medium),
    ("ГОРА", "Высокий холм", Difficulty::Medium),
    ("ПОЛЕ", "Открытое пространство", Difficulty::Medium),
    ("ЛУНА", "Спутник Земли", Difficulty::Medium),
    ("СЛОН", "Крупное животное", Difficulty::Hard),
    ("ЛИСА", "Хитрое животное", Difficulty::Hard),
    ("ВОЛК", "Лесной хищник", Difficulty::Hard),
    ("СОВА", "Ночная птица", Difficulty::Hard),
    ("ЛОСЬ", "Лесной великан", Difficulty::Hard),
    ("ИВА", "Плакучее дерево", Difficulty::Hard),
    ("ТИГР", "Полосатый хищник", Difficulty::Hard),
    ("ЗМЕЯ", "Ползучее пресмыкающееся", Difficulty::Hard),
    ("ОРЁЛ", "Хищная птица", Difficulty::Hard),
    ("ЗВЕЗДА", "Небесное тело", Difficulty::Hard),
    ("СОЛНЦЕ", "Центр системы", Difficulty::Hard),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_respects_max_length_and_limit() {
        let pool = BuiltinWordPool::new();
        let mut rng = Pcg64::seed_from_u64(1);
        for difficulty in Difficulty::ALL {
            let words = pool.words_for(difficulty, "ru", &mut rng);
            assert!(words.len() <= difficulty.word_limit());
            for word in &words {
                assert_eq!(word.difficulty(), difficulty);
                assert!(word.len() <= difficulty.max_word_length());
            }
        }
    }

    #[test]
    fn test_pool_accepts_any_rng_behind_a_trait_object() {
        let pool = BuiltinWordPool::new();
        let mut rng = Pcg64::seed_from_u64(1);
        let rng: &mut dyn Rng = &mut rng;
        assert!(!pool.words_for(Difficulty::Easy, "ru", rng).is_empty());
    }

    #[test]
    fn test_easy_pool_is_all_three_letter_words() {
        // 6 of the 7 built-in easy words are length 3; РЕПА is over the
        // easy length cap and must never be selected.
        let pool = BuiltinWordPool::new();
        let mut rng = Pcg64::seed_from_u64(3);
        let words = pool.words_for(Difficulty::Easy, "ru", &mut rng);
        assert_eq!(words.len(), 6);
        assert!(words.iter().all(|word| word.len() == 3));
        assert!(!words.iter().any(|word| word.text() == "РЕПА"));
    }

    #[test]
    fn test_medium_pool_keeps_its_short_words() {
        // All 8 built-in medium words fit under the length cap, so every
        // selection contains the length-3 entries too.
        let pool = BuiltinWordPool::new();
        let mut rng = Pcg64::seed_from_u64(5);
        let words = pool.words_for(Difficulty::Medium, "ru", &mut rng);
        assert_eq!(words.len(), 8);
        for text in ["НОС", "ОСА", "ЛЕС"] {
            assert!(
                words.iter().any(|word| word.text() == text),
                "medium selection is missing {text}",
            );
        }
    }

    #[test]
    fn test_hard_pool_draws_from_the_whole_bucket() {
        // 11 hard words fit under the length cap and the limit is 10, so a
        // selection is never just the two six-letter entries.
        let pool = BuiltinWordPool::new();
        let mut rng = Pcg64::seed_from_u64(7);
        let words = pool.words_for(Difficulty::Hard, "ru", &mut rng);
        assert_eq!(words.len(), 10);
        assert!(words.iter().any(|word| word.len() == 4));
    }

    #[test]
    fn test_unknown_language_selects_nothing() {
        let pool = BuiltinWordPool::new();
        let mut rng = Pcg64::seed_from_u64(1);
        assert!(pool.words_for(Difficulty::Easy, "en", &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_reproduces_the_puzzle() {
        let pool = BuiltinWordPool::new();
        let engine = PlacementEngine::new(8);
        let a = generate_with_seed(&pool, &engine, Difficulty::Medium, "ru", 99);
        let b = generate_with_seed(&pool, &engine, Difficulty::Medium, "ru", 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_generation_places_at_least_one_word() {
        let pool = BuiltinWordPool::new();
        let engine = PlacementEngine::new(8);
        for seed in 0..16 {
            for difficulty in Difficulty::ALL {
                let puzzle = generate_with_seed(&pool, &engine, difficulty, "ru", seed);
                assert!(
                    !puzzle.words.is_empty(),
                    "seed {seed} produced an empty {difficulty} puzzle",
                );
            }
        }
    }
}
