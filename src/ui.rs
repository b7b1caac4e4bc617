#![cfg(feature = "std")]

use std::io::{self, Write};

use log::warn;

use crate::core::{GameStatus, Level, RoundSnapshot, LIVES};
use crate::session::SessionSummary;

/// Consumer of engine state. Never mutates the engine.
pub trait Presenter {
    /// Draw one frame of the current round.
    fn present(&mut self, view: &RoundSnapshot);

    /// Show the level menu.
    fn menu(&mut self) {}

    /// Say goodbye once the session ends.
    fn farewell(&mut self, _summary: &SessionSummary) {}
}

/// Which gallows parts are visible, in drawing order: head, body, left arm,
/// right arm, left leg, right leg. A part shows once enough lives are gone or
/// once the loss animation has advanced past its threshold.
pub fn visible_parts(lives: u8, hang_frame: u8) -> [bool; 6] {
    core::array::from_fn(|i| {
        let part = i as u8;
        lives <= LIVES - 1 - part || hang_frame > part * 5
    })
}

/// Rope character for a loss animation frame: the body swings once hanging.
fn rope(lives: u8, hang_frame: u8) -> char {
    if lives > 0 || hang_frame == 0 {
        return '|';
    }
    let angle = (hang_frame as f64 / 5.0).sin() * 0.2;
    if angle > 0.05 {
        '/'
    } else if angle < -0.05 {
        '\\'
    } else {
        '|'
    }
}

/// ASCII gallows for the given lives and animation frame.
pub fn gallows_lines(lives: u8, hang_frame: u8) -> Vec<String> {
    let [head, body, left_arm, right_arm, left_leg, right_leg] = visible_parts(lives, hang_frame);
    let pick = |shown: bool, c: char| if shown { c } else { ' ' };
    vec![
        "  +-----+".to_string(),
        format!("  |     {}", rope(lives, hang_frame)),
        format!("  |     {}", pick(head, 'O')),
        format!(
            "  |    {}{}{}",
            pick(left_arm, '/'),
            pick(body, '|'),
            pick(right_arm, '\\')
        ),
        format!("  |     {}", pick(body, '|')),
        format!("  |    {} {}", pick(left_leg, '/'), pick(right_leg, '\\')),
        "  |".to_string(),
        "=====".to_string(),
    ]
}

/// Text block for a round, without terminal control sequences.
pub fn render_view(view: &RoundSnapshot) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("HANGMAN                     Level: {}", view.level));
    lines.push("════════════════════════════════════════".to_string());
    lines.push(String::new());
    lines.extend(gallows_lines(view.lives, view.hang_frame));
    lines.push(String::new());
    lines.push(format!("    {}", view.word));
    lines.push(String::new());
    let guessed: Vec<String> = view.guessed.iter().map(char::to_string).collect();
    lines.push(format!("Guessed: {}", guessed.join(" ")));
    lines.push(format!("Lives: {}", view.lives));
    lines.push(format!("Time: {}", view.time_remaining));

    if view.status.is_terminal() {
        lines.push(String::new());
        let headline = match view.status {
            GameStatus::Won => "You Win!",
            _ => "Game Over!",
        };
        lines.push(format!("    {}", headline));
        if let Some(answer) = &view.answer {
            lines.push(format!("Answer: {}", answer));
        }
        lines.push("Press R to restart, 1/2/3 to change level or Q to quit.".to_string());
    } else {
        lines.push(String::new());
        lines.push("Type a letter and press ENTER (or 'quit').".to_string());
    }
    lines
}

/// Text block for the level menu.
pub fn render_menu() -> Vec<String> {
    let mut lines = vec![
        "HANGMAN".to_string(),
        "════════════════════════════════════════".to_string(),
        "Select Level:".to_string(),
    ];
    for level in Level::ALL {
        lines.push(format!(
            "  {}: {}  ({})",
            level.menu_key(),
            level,
            level.description()
        ));
    }
    lines.push("Press 1, 2, or 3 to choose".to_string());
    lines
}

/// Draws the game on a terminal, clearing the screen every frame.
///
/// Write errors never stop the game; the first one is logged and later ones
/// are dropped.
#[derive(Debug)]
pub struct TerminalPresenter<W: Write = io::Stdout> {
    out: W,
    write_failed: bool,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            write_failed: false,
        }
    }

    /// Whether any write to the terminal has failed.
    pub fn write_failed(&self) -> bool {
        self.write_failed
    }

    fn draw(&mut self, lines: &[String]) {
        let result = write_frame(&mut self.out, lines);
        self.check(result);
    }

    fn check(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            if !self.write_failed {
                warn!("Cannot write to the terminal: {}", err);
            }
            self.write_failed = true;
        }
    }
}

fn write_frame<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    write!(out, "\x1B[2J\x1B[H")?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, view: &RoundSnapshot) {
        self.draw(&render_view(view));
    }

    fn menu(&mut self) {
        self.draw(&render_menu());
    }

    fn farewell(&mut self, summary: &SessionSummary) {
        let result = writeln!(
            self.out,
            "Thanks for playing! Rounds: {}  Won: {}  Lost: {}",
            summary.rounds, summary.wins, summary.losses
        )
        .and_then(|()| self.out.flush());
        self.check(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Round, HANG_ANIMATION_FRAMES};
    use std::time::Duration;

    #[test]
    fn full_lives_show_empty_gallows() {
        assert_eq!(visible_parts(LIVES, 0), [false; 6]);
    }

    #[test]
    fn parts_follow_lost_lives() {
        assert_eq!(visible_parts(5, 0), [true, false, false, false, false, false]);
        assert_eq!(visible_parts(2, 0), [true, true, true, true, false, false]);
        assert_eq!(visible_parts(0, 0), [true; 6]);
    }

    #[test]
    fn animation_reveals_parts_in_steps() {
        assert_eq!(visible_parts(LIVES, 1), [true, false, false, false, false, false]);
        assert_eq!(visible_parts(LIVES, 6), [true, true, false, false, false, false]);
        assert_eq!(visible_parts(LIVES, HANG_ANIMATION_FRAMES), [true; 6]);
    }

    #[test]
    fn rope_only_swings_after_loss() {
        assert_eq!(rope(3, 10), '|');
        assert_eq!(rope(0, 0), '|');
        assert_eq!(rope(0, 8), '/');
    }

    #[test]
    fn answer_only_shown_when_over() {
        let mut round = Round::with_answer(Level::Basic, "ox", Duration::ZERO);
        let text = render_view(&round.snapshot()).join("\n");
        assert!(!text.contains("Answer:"));
        round.submit_guess('o');
        round.submit_guess('x');
        let text = render_view(&round.snapshot()).join("\n");
        assert!(text.contains("You Win!"));
        assert!(text.contains("Answer: ox"));
    }

    #[test]
    fn menu_lists_all_levels() {
        let text = render_menu().join("\n");
        assert!(text.contains("1: Basic  (Word)"));
        assert!(text.contains("2: Intermediate  (Phrase)"));
        assert!(text.contains("3: Hard  (Expert)"));
    }

    struct BrokenPipe {
        attempts: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn frames_are_written_with_screen_clear() {
        let mut presenter = TerminalPresenter::with_writer(Vec::new());
        presenter.menu();
        let text = String::from_utf8(presenter.out.clone()).unwrap();
        assert!(text.starts_with("\x1B[2J\x1B[H"));
        assert!(text.contains("Select Level:"));
        assert!(!presenter.write_failed());
    }

    #[test]
    fn write_failure_is_recorded_and_play_continues() {
        let round = Round::with_answer(Level::Basic, "ox", Duration::ZERO);
        let mut presenter = TerminalPresenter::with_writer(BrokenPipe { attempts: 0 });
        presenter.present(&round.snapshot());
        assert!(presenter.write_failed());

        presenter.present(&round.snapshot());
        presenter.farewell(&SessionSummary::default());
        assert!(presenter.write_failed());
        assert_eq!(presenter.out.attempts, 3);
    }
}
