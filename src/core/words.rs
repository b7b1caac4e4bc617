//! Validated word lists, one per level.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rand::Rng;

use crate::core::{
    common::ConfigError,
    config::{BASIC_WORDS, HARD_PHRASES, INTERMEDIATE_PHRASES, PLACEHOLDER},
    level::Level,
};

/// Source lists for answers. Every list is non-empty, every entry has at
/// least one guessable letter and no entry contains the placeholder; the
/// constructor enforces all of this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    basic: Vec<String>,
    intermediate: Vec<String>,
    hard: Vec<String>,
}

impl WordLists {
    pub fn new(
        basic: Vec<String>,
        intermediate: Vec<String>,
        hard: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let lists = Self {
            basic,
            intermediate,
            hard,
        };
        for level in Level::ALL {
            let entries = lists.for_level(level);
            if entries.is_empty() {
                return Err(ConfigError::EmptyWordList(level));
            }
            if let Some(bad) = entries.iter().find(|e| !e.chars().any(char::is_alphabetic)) {
                return Err(ConfigError::NoGuessableLetters(level, bad.clone()));
            }
            if let Some(bad) = entries.iter().find(|e| e.contains(PLACEHOLDER)) {
                return Err(ConfigError::ContainsPlaceholder(level, bad.clone()));
            }
        }
        Ok(lists)
    }

    /// The built-in lists.
    pub fn standard() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }
        Self {
            basic: owned(&BASIC_WORDS),
            intermediate: owned(&INTERMEDIATE_PHRASES),
            hard: owned(&HARD_PHRASES),
        }
    }

    /// Entries for a level.
    pub fn for_level(&self, level: Level) -> &[String] {
        match level {
            Level::Basic => &self.basic,
            Level::Intermediate => &self.intermediate,
            Level::Hard => &self.hard,
        }
    }

    /// Draw one entry for `level` uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> &str {
        let entries = self.for_level(level);
        &entries[rng.random_range(0..entries.len())]
    }
}

impl Default for WordLists {
    fn default() -> Self {
        Self::standard()
    }
}
