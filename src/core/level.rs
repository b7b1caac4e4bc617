//! Difficulty tiers selecting which word list a round draws from.

use core::fmt;

/// Difficulty tier of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Single words.
    #[default]
    Basic,
    /// Short phrases.
    Intermediate,
    /// Longer phrases, some with punctuation.
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Basic, Level::Intermediate, Level::Hard];

    /// Resolve a level by name, case-insensitively. Unrecognized names fall
    /// back to [`Level::Basic`].
    pub fn from_name(name: &str) -> Level {
        Self::parse(name).unwrap_or_default()
    }

    /// Strict lookup by name or menu key (`1`, `2`, `3`).
    pub fn parse(name: &str) -> Option<Level> {
        let name = name.trim();
        Self::ALL.into_iter().find(|level| {
            name.eq_ignore_ascii_case(level.name())
                || (name.len() == 1 && name.starts_with(level.menu_key()))
        })
    }

    /// Lowercase identifier used on the command line and in word list files.
    pub fn name(self) -> &'static str {
        match self {
            Level::Basic => "basic",
            Level::Intermediate => "intermediate",
            Level::Hard => "hard",
        }
    }

    /// Key that selects this level in the level menu.
    pub fn menu_key(self) -> char {
        match self {
            Level::Basic => '1',
            Level::Intermediate => '2',
            Level::Hard => '3',
        }
    }

    /// Short description shown next to the level in the menu.
    pub fn description(self) -> &'static str {
        match self {
            Level::Basic => "Word",
            Level::Intermediate => "Phrase",
            Level::Hard => "Expert",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Basic => "Basic",
            Level::Intermediate => "Intermediate",
            Level::Hard => "Hard",
        };
        f.write_str(label)
    }
}
