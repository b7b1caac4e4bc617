//! Core hangman game engine (no_std compatible)
//!
//! This module contains the pure game logic: word lists, the round state
//! machine and the engine that ties them to an RNG and a clock. It only needs
//! `alloc`, `rand` and the `log` facade.

pub mod clock;
pub mod common;
pub mod config;
pub mod game;
pub mod level;
pub mod round;
pub mod words;

// Re-export commonly used types
pub use clock::{Clock, ManualClock};
#[cfg(feature = "std")]
pub use clock::MonotonicClock;
pub use common::{ConfigError, GuessOutcome, IgnoreReason};
pub use config::*;
pub use game::GameEngine;
pub use level::Level;
pub use round::{GameStatus, Round, RoundSnapshot};
pub use words::WordLists;
