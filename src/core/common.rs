//! Common types for Hangman: guess outcomes and configuration errors.

use alloc::string::String;

use crate::core::{config::PLACEHOLDER, level::Level};

/// Result of submitting a guess to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the answer; carries how many positions it revealed.
    Correct { revealed: usize },
    /// The letter does not occur in the answer; carries the lives left.
    Incorrect { lives: u8 },
    /// The guess was dropped without touching the round.
    Ignored(IgnoreReason),
}

/// Why a guess left the round untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The round is already won or lost.
    NotInProgress,
    /// The character is not an alphabetic letter.
    NotALetter,
    /// The letter was already tried this round.
    AlreadyGuessed,
}

/// Errors raised while validating word lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The list for this level has no entries.
    EmptyWordList(Level),
    /// An entry has nothing for the player to guess.
    NoGuessableLetters(Level, String),
    /// An entry contains the character used to mask hidden letters.
    ContainsPlaceholder(Level, String),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyWordList(level) => write!(f, "Word list for level {} is empty", level),
            ConfigError::NoGuessableLetters(level, entry) => write!(
                f,
                "Entry {:?} in the {} word list contains no letters",
                entry, level
            ),
            ConfigError::ContainsPlaceholder(level, entry) => write!(
                f,
                "Entry {:?} in the {} word list contains the placeholder {:?}",
                entry, level, PLACEHOLDER
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Case-folds a character for comparisons against the answer.
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
