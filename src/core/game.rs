use rand::rngs::SmallRng;

use crate::core::{
    clock::Clock,
    common::GuessOutcome,
    level::Level,
    round::{GameStatus, Round, RoundSnapshot},
    words::WordLists,
};

/// Core game logic: owns the current round together with the word lists,
/// the RNG that draws answers and the clock that drives the countdown.
pub struct GameEngine<C: Clock> {
    words: WordLists,
    rng: SmallRng,
    clock: C,
    round: Round,
}

impl<C: Clock> GameEngine<C> {
    /// Create an engine and start a first round at `level`.
    pub fn new(words: WordLists, level: Level, mut rng: SmallRng, clock: C) -> Self {
        let round = Round::with_answer(level, words.choose(level, &mut rng), clock.now());
        Self {
            words,
            rng,
            clock,
            round,
        }
    }

    /// Discard the current round and draw a fresh one at `level`.
    pub fn start_round(&mut self, level: Level) {
        let answer = self.words.choose(level, &mut self.rng);
        self.round = Round::with_answer(level, answer, self.clock.now());
    }

    /// Start a fresh round at the current level.
    pub fn restart(&mut self) {
        self.start_round(self.round.level());
    }

    pub fn submit_guess(&mut self, letter: char) -> GuessOutcome {
        self.round.submit_guess(letter)
    }

    /// Sample the clock and update the countdown.
    pub fn tick(&mut self) {
        self.round.tick(self.clock.now());
    }

    pub fn advance_loss_animation(&mut self) {
        self.round.advance_loss_animation();
    }

    /// Per-frame update: the countdown runs while the round is in progress,
    /// the loss animation after it was lost.
    pub fn frame(&mut self) {
        match self.round.status() {
            GameStatus::InProgress => self.tick(),
            GameStatus::Lost => self.advance_loss_animation(),
            GameStatus::Won => {}
        }
    }

    pub fn rendered_word(&self) -> alloc::string::String {
        self.round.rendered_word()
    }

    pub fn status(&self) -> GameStatus {
        self.round.status()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn words(&self) -> &WordLists {
        &self.words
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
