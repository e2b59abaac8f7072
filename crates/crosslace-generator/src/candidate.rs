//! Candidate words supplied by a word pool.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Error returned when constructing a [`CandidateWord`] from invalid input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The word text contained no letters.
    #[display("candidate word text is empty")]
    EmptyText,
}

/// Error returned when parsing a [`Difficulty`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {name:?} (expected easy, medium, or hard)")]
pub struct ParseDifficultyError {
    /// The unrecognized input.
    pub name: String,
}

/// Difficulty bucket of a candidate word.
///
/// Each bucket carries the selection parameters of the original game's
/// per-difficulty query: a maximum word length and a word-count limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Short, common words (length at most 3, up to 6 per puzzle).
    Easy,
    /// Words up to length 4, up to 8 per puzzle.
    Medium,
    /// Words up to length 6, up to 10 per puzzle.
    Hard,
}

impl Difficulty {
    /// All difficulty buckets, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The longest word the pool selects for this bucket.
    #[must_use]
    pub const fn max_word_length(self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Medium => 4,
            Self::Hard => 6,
        }
    }

    /// How many words the pool supplies per puzzle for this bucket.
    #[must_use]
    pub const fn word_limit(self) -> usize {
        match self {
            Self::Easy => 6,
            Self::Medium => 8,
            Self::Hard => 10,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError {
                name: s.to_owned(),
            }),
        }
    }
}

/// A word eligible for placement, together with its clue.
///
/// The text is normalized to uppercase at construction; the engine compares
/// letters in uppercase throughout.
///
/// # Examples
///
/// ```
/// use crosslace_generator::{CandidateWord, Difficulty};
///
/// let word = CandidateWord::new("кот", "Домашний питомец", Difficulty::Easy, "ru").unwrap();
/// assert_eq!(word.text(), "КОТ");
/// assert_eq!(word.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWord {
    text: String,
    clue: String,
    difficulty: Difficulty,
    language: String,
}

impl CandidateWord {
    /// Creates a candidate, uppercasing the text.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::EmptyText`] if `text` contains no characters.
    pub fn new(
        text: impl Into<String>,
        clue: impl Into<String>,
        difficulty: Difficulty,
        language: impl Into<String>,
    ) -> Result<Self, WordError> {
        let text: String = text.into();
        if text.is_empty() {
            return Err(WordError::EmptyText);
        }
        Ok(Self {
            text: text.to_uppercase(),
            clue: clue.into(),
            difficulty,
            language: language.into(),
        })
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

    /// The difficulty bucket this word belongs to.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The language tag (e.g. `"ru"`).
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Word length in letters (characters, not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the word has no letters. Always `false` for a
    /// constructed candidate; provided for the usual `len`/`is_empty` pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_uppercased() {
        let word = CandidateWord::new("дом", "Место жительства", Difficulty::Easy, "ru").unwrap();
        assert_eq!(word.text(), "ДОМ");
        assert_eq!(word.clue(), "Место жительства");
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let err = CandidateWord::new("", "clue", Difficulty::Easy, "ru").unwrap_err();
        assert_eq!(err, WordError::EmptyText);
    }

    #[test]
    fn test_len_counts_characters() {
        let word = CandidateWord::new("ЗВЕЗДА", "Небесное тело", Difficulty::Hard, "ru").unwrap();
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn test_difficulty_round_trips_through_strings() {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                difficulty.to_string().parse::<Difficulty>().unwrap(),
                difficulty
            );
        }
        assert!("nightmare".parse::<Difficulty>().is_err());
    }
}
