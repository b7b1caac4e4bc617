#![cfg(feature = "std")]

use std::time::Duration;

use log::{debug, info};
use tokio::time::MissedTickBehavior;

use crate::{
    core::{Clock, GameEngine, GameStatus, Level, FRAMES_PER_SECOND},
    input::{resolve, Command, InputEvent, InputSource},
    ui::Presenter,
};

/// Tally of one sitting. Kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds started, including one still running.
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
}

enum Step {
    Input(Option<Command>),
    Frame,
}

/// Frame-driven loop wiring an input source and a presenter to the engine.
///
/// Each iteration handles one input command or one frame tick, input first,
/// then redraws if anything visible changed.
pub struct Session<S: InputSource, P: Presenter, C: Clock> {
    engine: GameEngine<C>,
    source: S,
    presenter: P,
    summary: SessionSummary,
    outcome_recorded: bool,
}

impl<S: InputSource, P: Presenter, C: Clock> Session<S, P, C> {
    pub fn new(engine: GameEngine<C>, source: S, presenter: P) -> Self {
        Self {
            engine,
            source,
            presenter,
            summary: SessionSummary {
                rounds: 1,
                ..SessionSummary::default()
            },
            outcome_recorded: false,
        }
    }

    pub fn engine(&self) -> &GameEngine<C> {
        &self.engine
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Play until the player quits or the input source closes.
    pub async fn run(&mut self) -> SessionSummary {
        let mut frames = tokio::time::interval(Duration::from_secs(1) / FRAMES_PER_SECOND);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut last = self.engine.snapshot();
        self.presenter.present(&last);

        loop {
            let step = tokio::select! {
                biased;
                cmd = self.source.next_command() => Step::Input(cmd),
                _ = frames.tick() => Step::Frame,
            };

            match step {
                Step::Input(None) => {
                    info!("input closed, ending session");
                    break;
                }
                Step::Input(Some(cmd)) => {
                    if !self.apply(cmd) {
                        info!("player quit");
                        break;
                    }
                }
                Step::Frame => self.engine.frame(),
            }

            self.record_outcome();
            let view = self.engine.snapshot();
            if view != last {
                self.presenter.present(&view);
                last = view;
            }
        }

        self.presenter.farewell(&self.summary);
        self.summary
    }

    /// Apply one command. Returns `false` when the player asked to quit.
    fn apply(&mut self, cmd: Command) -> bool {
        match resolve(cmd, self.engine.status()) {
            Some(InputEvent::Guess(letter)) => {
                let outcome = self.engine.submit_guess(letter);
                debug!("guess {:?}: {:?}", letter, outcome);
            }
            Some(InputEvent::Restart) => {
                self.engine.restart();
                self.new_round();
            }
            Some(InputEvent::SelectLevel(level)) => {
                self.engine.start_round(level);
                self.new_round();
            }
            Some(InputEvent::Quit) => return false,
            None => debug!("{:?} has no effect while {:?}", cmd, self.engine.status()),
        }
        true
    }

    fn new_round(&mut self) {
        self.summary.rounds += 1;
        self.outcome_recorded = false;
        info!("round {} started at level {}", self.summary.rounds, self.engine.round().level());
    }

    fn record_outcome(&mut self) {
        if self.outcome_recorded {
            return;
        }
        match self.engine.status() {
            GameStatus::Won => self.summary.wins += 1,
            GameStatus::Lost => self.summary.losses += 1,
            GameStatus::InProgress => return,
        }
        self.outcome_recorded = true;
    }
}

/// Show the level menu and wait for a choice. `None` if the player quits or
/// input closes first.
pub async fn select_level<S, P>(source: &mut S, presenter: &mut P) -> Option<Level>
where
    S: InputSource,
    P: Presenter,
{
    presenter.menu();
    loop {
        match source.next_command().await? {
            Command::SelectLevel(level) => return Some(level),
            Command::Quit => return None,
            Command::Key(key) => debug!("menu ignores key {:?}", key),
        }
    }
}
