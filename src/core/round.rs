//! One playthrough: from word selection to a win or a loss.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use log::debug;

use crate::core::{
    common::{fold, GuessOutcome, IgnoreReason},
    config::{HANG_ANIMATION_FRAMES, LIVES, PLACEHOLDER, TIMER_LIMIT_SECS},
    level::Level,
};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// `true` once the round is won or lost.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Read-only view of a round handed to presentation code each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSnapshot {
    pub level: Level,
    /// Only present once the round is over.
    pub answer: Option<String>,
    /// `None` marks an unrevealed position.
    pub revealed: Vec<Option<char>>,
    /// Revealed positions joined by single spaces.
    pub word: String,
    pub guessed: Vec<char>,
    pub wrong: Vec<char>,
    pub lives: u8,
    pub time_remaining: u64,
    pub status: GameStatus,
    pub hang_frame: u8,
}

/// State of a single round.
///
/// Positions in `revealed` are `None` exactly while the answer holds an
/// alphabetic character there whose folded form has not been guessed. Once
/// the status is terminal only `hang_frame` may change, and only after a
/// loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    level: Level,
    answer: Vec<char>,
    revealed: Vec<Option<char>>,
    guessed: BTreeSet<char>,
    lives: u8,
    time_remaining: u64,
    window_start: Duration,
    status: GameStatus,
    hang_frame: u8,
}

impl Round {
    /// Start a round with a fixed answer. Non-alphabetic characters are
    /// revealed from the start.
    pub fn with_answer(level: Level, answer: &str, now: Duration) -> Self {
        let answer: Vec<char> = answer.chars().collect();
        let revealed = answer
            .iter()
            .map(|&c| if c.is_alphabetic() { None } else { Some(c) })
            .collect();
        debug!("round started at level {} ({} characters)", level, answer.len());
        Self {
            level,
            answer,
            revealed,
            guessed: BTreeSet::new(),
            lives: LIVES,
            time_remaining: TIMER_LIMIT_SECS,
            window_start: now,
            status: GameStatus::InProgress,
            hang_frame: 0,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Whole seconds left in the current guessing window.
    pub fn time_remaining(&self) -> u64 {
        self.time_remaining
    }

    /// Timestamp at which the current guessing window opened.
    pub fn window_start(&self) -> Duration {
        self.window_start
    }

    pub fn hang_frame(&self) -> u8 {
        self.hang_frame
    }

    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    /// Letters tried so far, lowercase and sorted.
    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Tried letters that do not occur in the answer.
    pub fn wrong_guesses(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed
            .iter()
            .copied()
            .filter(|&g| !self.answer.iter().any(|&c| fold(c) == g))
    }

    /// The full answer. Front ends should only show it once the round is over.
    pub fn answer(&self) -> String {
        self.answer.iter().collect()
    }

    /// Submit a single-character guess.
    ///
    /// Non-letters, repeats and guesses after the round ended leave the round
    /// untouched. A hit reveals every occurrence at once; a miss costs a life.
    pub fn submit_guess(&mut self, letter: char) -> GuessOutcome {
        if self.status != GameStatus::InProgress {
            return GuessOutcome::Ignored(IgnoreReason::NotInProgress);
        }
        if !letter.is_alphabetic() {
            return GuessOutcome::Ignored(IgnoreReason::NotALetter);
        }
        let letter = fold(letter);
        if !self.guessed.insert(letter) {
            return GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed);
        }

        let mut revealed = 0;
        for (slot, &c) in self.revealed.iter_mut().zip(self.answer.iter()) {
            if slot.is_none() && fold(c) == letter {
                *slot = Some(c);
                revealed += 1;
            }
        }

        if revealed > 0 {
            debug!("guess '{}' revealed {} position(s)", letter, revealed);
            if self.revealed.iter().all(Option::is_some) {
                self.status = GameStatus::Won;
                debug!("round won with {} lives left", self.lives);
            }
            GuessOutcome::Correct { revealed }
        } else {
            self.lose_life();
            debug!("guess '{}' missed, {} lives left", letter, self.lives);
            GuessOutcome::Incorrect { lives: self.lives }
        }
    }

    /// Sample the countdown at `now`.
    ///
    /// When the window runs out the round loses a life and a fresh window
    /// opens at `now`. Does nothing once the round is over.
    pub fn tick(&mut self, now: Duration) {
        if self.status != GameStatus::InProgress {
            return;
        }
        let elapsed = now.saturating_sub(self.window_start).as_secs();
        self.time_remaining = TIMER_LIMIT_SECS.saturating_sub(elapsed);
        if self.time_remaining == 0 {
            self.lose_life();
            self.window_start = now;
            self.time_remaining = TIMER_LIMIT_SECS;
            debug!("guess window expired, {} lives left", self.lives);
        }
    }

    /// Step the loss animation by one frame. Only moves after a loss.
    pub fn advance_loss_animation(&mut self) {
        if self.status == GameStatus::Lost && self.hang_frame < HANG_ANIMATION_FRAMES {
            self.hang_frame += 1;
        }
    }

    /// Revealed positions joined by single spaces, placeholders included.
    pub fn rendered_word(&self) -> String {
        let mut out = String::with_capacity(self.revealed.len() * 2);
        for (i, slot) in self.revealed.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(slot.unwrap_or(PLACEHOLDER));
        }
        out
    }

    /// Copy out everything a presentation layer needs for one frame.
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            level: self.level,
            answer: self.status.is_terminal().then(|| self.answer()),
            revealed: self.revealed.clone(),
            word: self.rendered_word(),
            guessed: self.guessed.iter().copied().collect(),
            wrong: self.wrong_guesses().collect(),
            lives: self.lives,
            time_remaining: self.time_remaining,
            status: self.status,
            hang_frame: self.hang_frame,
        }
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.status = GameStatus::Lost;
            debug!("round lost");
        }
    }
}
