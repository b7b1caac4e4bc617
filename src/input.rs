#![cfg(feature = "std")]

//! Player input: raw commands from a source, resolved against the round status.

use std::collections::VecDeque;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::core::{GameStatus, Level};

/// A command as typed, before the round status gives it meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A single key.
    Key(char),
    /// Menu selection of a level.
    SelectLevel(Level),
    /// Leave the game.
    Quit,
}

/// What a command means for the engine right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Guess(char),
    Restart,
    SelectLevel(Level),
    Quit,
}

/// Parse one line of player input. Returns `None` for lines that mean nothing.
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Some(Command::Quit);
    }
    if let Some(level) = Level::parse(line) {
        return Some(Command::SelectLevel(level));
    }
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(Command::Key(c)),
        _ => None,
    }
}

/// Give a command its meaning under `status`.
///
/// While a round is running every key is a guess and level selection waits.
/// Once it is over, `r` restarts, `q` quits and a level starts a new round.
pub fn resolve(command: Command, status: GameStatus) -> Option<InputEvent> {
    match (command, status) {
        (Command::Quit, _) => Some(InputEvent::Quit),
        (Command::Key(c), GameStatus::InProgress) => Some(InputEvent::Guess(c)),
        (Command::SelectLevel(_), GameStatus::InProgress) => None,
        (Command::SelectLevel(level), _) => Some(InputEvent::SelectLevel(level)),
        (Command::Key(c), _) => match c.to_ascii_lowercase() {
            'r' => Some(InputEvent::Restart),
            'q' => Some(InputEvent::Quit),
            _ => None,
        },
    }
}

/// Anything that can feed commands into a session.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Wait for the next command. `None` once the source is closed.
    ///
    /// Must be cancel safe: the session drops this future whenever a frame
    /// tick arrives first.
    async fn next_command(&mut self) -> Option<Command>;
}

/// Reads lines from standard input on a background task.
pub struct StdinSource {
    lines: mpsc::Receiver<String>,
}

impl StdinSource {
    /// Spawn the reader task. Must be called inside a Tokio runtime.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel(16);
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if tx.send(line).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        log::warn!("stdin read failed: {}", e);
                        break;
                    }
                }
            }
        });
        Self { lines: rx }
    }
}

#[async_trait::async_trait]
impl InputSource for StdinSource {
    async fn next_command(&mut self) -> Option<Command> {
        loop {
            let line = self.lines.recv().await?;
            match parse_line(&line) {
                Some(cmd) => return Some(cmd),
                None => log::debug!("ignoring input line {:?}", line),
            }
        }
    }
}

/// Replays a fixed list of commands, then reports the source as closed.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<Command>,
}

impl ScriptedSource {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            queue: commands.into_iter().collect(),
        }
    }

    /// Build a script from lines, dropping those that do not parse.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(lines.into_iter().filter_map(parse_line))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[async_trait::async_trait]
impl InputSource for ScriptedSource {
    async fn next_command(&mut self) -> Option<Command> {
        self.queue.pop_front()
    }
}
